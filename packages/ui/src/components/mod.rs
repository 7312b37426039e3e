//! Small presentational building blocks shared by every page.

mod button;
pub use button::{Button, ButtonVariant};

mod card;
pub use card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};

mod input;
pub use input::{Input, Label};

mod switch;
pub use switch::Switch;

mod toast;
pub use toast::{use_toast, ToastProvider, Toasts};
