//! App-wide yewdux store.
//!
//! # Design
//! - Session and locale are the only state shared across views.
//! - Loaded once at startup from [`Preferences`]; every mutation that changes
//!   them also writes through, so storage never lags the store.
//! - Persistence failures are returned to the caller for logging; the in-memory
//!   change still applies.

use crate::core::persist::{KeyValueStore, PersistError, Preferences};
use crate::core::routes::Route;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use hoaxify_api_models::AuthUser;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store)]
pub struct AppStore {
    /// Logged-in user, if any.
    pub session: Option<AuthUser>,
    /// Active UI language.
    pub locale: LocaleCode,
}

impl Default for AppStore {
    fn default() -> Self {
        Self {
            session: None,
            locale: DEFAULT_LOCALE,
        }
    }
}

/// Entry in the top navigation bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavItem {
    /// Route link with its `data-testid`, translation key and target.
    Link {
        /// Stable test id.
        test_id: &'static str,
        /// Translation key for the label.
        label_key: &'static str,
        /// Navigation target.
        route: Route,
    },
    /// Logout action.
    Logout,
}

impl AppStore {
    /// Startup state: persisted session and language, else the browser language.
    #[must_use]
    pub fn load<S: KeyValueStore>(prefs: &Preferences<S>, browser_lang: Option<&str>) -> Self {
        let locale = prefs
            .load_locale()
            .or_else(|| browser_lang.and_then(LocaleCode::from_lang_tag))
            .unwrap_or(DEFAULT_LOCALE);
        Self {
            session: prefs.load_auth(),
            locale,
        }
    }

    /// Whether a user is logged in.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// Record a successful login and persist it.
    ///
    /// # Errors
    /// Returns the storage failure; the session is set regardless.
    pub fn sign_in<S: KeyValueStore>(
        &mut self,
        user: AuthUser,
        prefs: &Preferences<S>,
    ) -> Result<(), PersistError> {
        let saved = prefs.save_auth(Some(&user));
        self.session = Some(user);
        saved
    }

    /// Forget the session and its persisted copy.
    ///
    /// # Errors
    /// Returns the storage failure; the session is cleared regardless.
    pub fn sign_out<S: KeyValueStore>(
        &mut self,
        prefs: &Preferences<S>,
    ) -> Result<(), PersistError> {
        self.session = None;
        prefs.save_auth(None)
    }

    /// Switch the active language and persist it.
    ///
    /// # Errors
    /// Returns the storage failure; the locale is switched regardless.
    pub fn set_locale<S: KeyValueStore>(
        &mut self,
        locale: LocaleCode,
        prefs: &Preferences<S>,
    ) -> Result<(), PersistError> {
        self.locale = locale;
        prefs.save_locale(locale)
    }

    /// Navigation entries for the current session.
    #[must_use]
    pub fn nav_items(&self) -> Vec<NavItem> {
        let mut items = vec![NavItem::Link {
            test_id: "link-home-page",
            label_key: "nav.home",
            route: Route::Home,
        }];
        match &self.session {
            Some(user) => {
                items.push(NavItem::Link {
                    test_id: "link-my-profile",
                    label_key: "nav.myProfile",
                    route: Route::User {
                        id: user.id.to_string(),
                    },
                });
                items.push(NavItem::Logout);
            }
            None => {
                items.push(NavItem::Link {
                    test_id: "link-signup-page",
                    label_key: "nav.signUp",
                    route: Route::SignUp,
                });
                items.push(NavItem::Link {
                    test_id: "link-login-page",
                    label_key: "nav.login",
                    route: Route::Login,
                });
            }
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persist::{AUTH_KEY, LOCALE_KEY, MemoryStore};

    fn user1() -> AuthUser {
        AuthUser {
            id: 1,
            username: "user1".to_string(),
            email: "user1@mail.com".to_string(),
            image: None,
        }
    }

    fn test_ids(store: &AppStore) -> Vec<&'static str> {
        store
            .nav_items()
            .iter()
            .map(|item| match item {
                NavItem::Link { test_id, .. } => *test_id,
                NavItem::Logout => "link-logout",
            })
            .collect()
    }

    #[test]
    fn load_prefers_stored_language_over_browser() {
        let prefs = Preferences::new(MemoryStore::default());
        assert_eq!(AppStore::load(&prefs, Some("tr-TR")).locale, LocaleCode::Tr);
        prefs.save_locale(LocaleCode::En).expect("save");
        assert_eq!(AppStore::load(&prefs, Some("tr-TR")).locale, LocaleCode::En);
        assert_eq!(
            AppStore::load(&Preferences::new(MemoryStore::default()), None).locale,
            DEFAULT_LOCALE
        );
    }

    #[test]
    fn stored_auth_gives_logged_in_layout() {
        let prefs = Preferences::new(MemoryStore::default());
        prefs.save_auth(Some(&user1())).expect("save");
        let store = AppStore::load(&prefs, None);
        assert!(store.is_logged_in());
        assert_eq!(
            test_ids(&store),
            vec!["link-home-page", "link-my-profile", "link-logout"]
        );
    }

    #[test]
    fn sign_in_writes_auth_entry() {
        let prefs = Preferences::new(MemoryStore::default());
        let mut store = AppStore::default();
        assert_eq!(
            test_ids(&store),
            vec!["link-home-page", "link-signup-page", "link-login-page"]
        );

        store.sign_in(user1(), &prefs).expect("persist");
        let raw = prefs.storage().read(AUTH_KEY).expect("auth");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(value["id"], 1);
        assert_eq!(value["username"], "user1");
        assert!(!test_ids(&store).contains(&"link-login-page"));
    }

    #[test]
    fn my_profile_targets_own_user_page() {
        let mut store = AppStore::default();
        store
            .sign_in(user1(), &Preferences::new(MemoryStore::default()))
            .expect("persist");
        let profile = store.nav_items().into_iter().find_map(|item| match item {
            NavItem::Link {
                test_id: "link-my-profile",
                route,
                ..
            } => Some(route),
            _ => None,
        });
        assert_eq!(profile, Some(Route::User { id: "1".to_string() }));
    }

    #[test]
    fn sign_out_restores_anonymous_layout() {
        let prefs = Preferences::new(MemoryStore::default());
        let mut store = AppStore::default();
        store.sign_in(user1(), &prefs).expect("persist");
        store.sign_out(&prefs).expect("persist");
        assert!(prefs.storage().read(AUTH_KEY).is_none());
        assert_eq!(
            test_ids(&store),
            vec!["link-home-page", "link-signup-page", "link-login-page"]
        );
    }

    #[test]
    fn set_locale_persists_code() {
        let prefs = Preferences::new(MemoryStore::default());
        let mut store = AppStore::default();
        store.set_locale(LocaleCode::Tr, &prefs).expect("persist");
        assert_eq!(store.locale, LocaleCode::Tr);
        assert_eq!(prefs.storage().read(LOCALE_KEY).as_deref(), Some("tr"));
    }
}
