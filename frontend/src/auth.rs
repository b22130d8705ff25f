use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};
use log::{error, info, warn};
use yew::functional::use_reducer_eq;
use yew::prelude::*;

use crate::config::Config;

/// Admin session. There is one admin account and no server-side session, so
/// this is only a flag persisted in LocalStorage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub username: Option<String>,
    pub error: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }

    fn restore() -> Self {
        Self {
            username: LocalStorage::get::<String>(Config::SESSION_KEY).ok(),
            error: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    Login { username: String, password: String },
    Logout,
    ClearError,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Login { username, password } => {
                if !Config::admin_credentials_match(&username, &password) {
                    warn!("Rejected admin login for '{}'", username);
                    return Rc::new(Self {
                        username: None,
                        error: Some("Invalid credentials".to_string()),
                    });
                }
                if let Err(e) = LocalStorage::set(Config::SESSION_KEY, &username) {
                    error!("Failed to store session in local storage: {}", e);
                }
                info!("Admin '{}' signed in", username);
                Rc::new(Self {
                    username: Some(username),
                    error: None,
                })
            }
            SessionAction::Logout => {
                LocalStorage::delete(Config::SESSION_KEY);
                Rc::new(Self::default())
            }
            SessionAction::ClearError => Rc::new(Self {
                error: None,
                ..(*self).clone()
            }),
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionContext {
    pub state: SessionState,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer_eq(SessionState::restore);

    let login = {
        let session = session.clone();
        Callback::from(move |(username, password): (String, String)| {
            session.dispatch(SessionAction::Login { username, password });
        })
    };

    let logout = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            session.dispatch(SessionAction::Logout);
        })
    };

    let context = SessionContext {
        state: (*session).clone(),
        login,
        logout,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}
