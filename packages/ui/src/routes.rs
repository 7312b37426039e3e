//! Route table and the thin route components that bind views to navigation.

use dioxus::prelude::*;

use crate::views::{
    ActivityLogView, AppShell, ChangePasswordView, LoginView, ProfileView, RegisterView,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Profile {},
        #[route("/change-password")]
        ChangePassword {},
        #[route("/activity")]
        Activity {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
}

#[component]
fn Shell() -> Element {
    let nav = use_navigator();

    rsx! {
        AppShell {
            on_navigate_profile: move |_| {
                nav.push(Route::Profile {});
            },
            on_navigate_activity: move |_| {
                nav.push(Route::Activity {});
            },
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Profile() -> Element {
    let nav = use_navigator();

    rsx! {
        ProfileView {
            on_unauthenticated: move |_| {
                tracing::warn!("no session, redirecting to login");
                nav.replace(Route::Login {});
            },
            on_logged_out: move |_| {
                nav.replace(Route::Login {});
            },
            on_change_password: move |_| {
                nav.push(Route::ChangePassword {});
            },
        }
    }
}

#[component]
fn ChangePassword() -> Element {
    let nav = use_navigator();

    rsx! {
        ChangePasswordView {
            on_unauthenticated: move |_| {
                tracing::warn!("no session, redirecting to login");
                nav.replace(Route::Login {});
            },
            on_back: move |_| {
                nav.push(Route::Profile {});
            },
        }
    }
}

#[component]
fn Activity() -> Element {
    let nav = use_navigator();

    rsx! {
        ActivityLogView {
            on_back: move |_| {
                nav.push(Route::Profile {});
            },
        }
    }
}

#[component]
fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        LoginView {
            on_logged_in: move |_| {
                nav.replace(Route::Profile {});
            },
            on_navigate_register: move |_| {
                nav.push(Route::Register {});
            },
        }
    }
}

#[component]
fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        RegisterView {
            on_registered: move |_| {
                nav.replace(Route::Login {});
            },
            on_navigate_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
