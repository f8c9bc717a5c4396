// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use crate::state::AuthState;
use crate::utils::messages;

/// Secciones del documento (una sola visible)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Login,
    Register,
    ReportForm,
    ReportList,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Login,
        Section::Register,
        Section::ReportForm,
        Section::ReportList,
    ];

    /// ID del elemento `.secao` en index.html
    pub fn element_id(self) -> &'static str {
        match self {
            Section::Login => "secaoLogin",
            Section::Register => "secaoRegistro",
            Section::ReportForm => "secaoRelatorio",
            Section::ReportList => "secaoListaRelatorios",
        }
    }

    /// Requiere token
    pub fn is_protected(self) -> bool {
        matches!(self, Section::ReportForm | Section::ReportList)
    }

    /// Sección inicial según el estado de autenticación
    pub fn landing(authenticated: bool) -> Self {
        if authenticated {
            Section::ReportForm
        } else {
            Section::Login
        }
    }
}

/// Resultado de pedir una sección
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionResolution {
    pub section: Section,
    /// Mensaje para `loginMensagem` cuando se bloquea el acceso
    pub guard_message: Option<&'static str>,
}

/// Sección protegida sin token → Login + aviso
pub fn resolve_section(requested: Section, authenticated: bool) -> SectionResolution {
    if requested.is_protected() && !authenticated {
        SectionResolution {
            section: Section::Login,
            guard_message: Some(messages::LOGIN_REQUIRED_SECTION),
        }
    } else {
        SectionResolution {
            section: requested,
            guard_message: None,
        }
    }
}

/// Botones de navegación
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Login,
    Register,
    ReportForm,
    ReportList,
    Logout,
}

impl NavItem {
    pub const ALL: [NavItem; 5] = [
        NavItem::Login,
        NavItem::Register,
        NavItem::ReportForm,
        NavItem::ReportList,
        NavItem::Logout,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            NavItem::Login => "navLogin",
            NavItem::Register => "navRegistro",
            NavItem::ReportForm => "navRelatorio",
            NavItem::ReportList => "navLista",
            NavItem::Logout => "navLogout",
        }
    }

    pub fn is_visible(self, authenticated: bool) -> bool {
        match self {
            NavItem::Login | NavItem::Register => !authenticated,
            NavItem::ReportForm | NavItem::ReportList | NavItem::Logout => authenticated,
        }
    }

    /// Valor de `style.display`
    pub fn display(self, authenticated: bool) -> &'static str {
        if self.is_visible(authenticated) {
            "flex"
        } else {
            "none"
        }
    }
}

/// Estado global de la aplicación (la sección visible vive en el DOM)
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
}

impl AppState {
    pub fn new(auth: AuthState) -> Self {
        Self { auth }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_sections_redirect_anonymous_users() {
        for section in [Section::ReportForm, Section::ReportList] {
            let resolution = resolve_section(section, false);
            assert_eq!(resolution.section, Section::Login);
            assert_eq!(resolution.guard_message, Some(messages::LOGIN_REQUIRED_SECTION));
        }
    }

    #[test]
    fn public_sections_are_always_reachable() {
        for authenticated in [false, true] {
            assert_eq!(resolve_section(Section::Login, authenticated).section, Section::Login);
            assert_eq!(resolve_section(Section::Register, authenticated).section, Section::Register);
            assert_eq!(resolve_section(Section::Register, authenticated).guard_message, None);
        }
    }

    #[test]
    fn authenticated_users_reach_protected_sections() {
        let resolution = resolve_section(Section::ReportList, true);
        assert_eq!(resolution.section, Section::ReportList);
        assert!(resolution.guard_message.is_none());
    }

    #[test]
    fn navigation_visibility_follows_auth() {
        let anonymous: Vec<_> = NavItem::ALL.iter().filter(|n| n.is_visible(false)).collect();
        assert_eq!(anonymous, vec![&NavItem::Login, &NavItem::Register]);

        let logged: Vec<_> = NavItem::ALL.iter().filter(|n| n.is_visible(true)).collect();
        assert_eq!(logged, vec![&NavItem::ReportForm, &NavItem::ReportList, &NavItem::Logout]);

        assert_eq!(NavItem::Logout.display(true), "flex");
        assert_eq!(NavItem::Logout.display(false), "none");
    }

    #[test]
    fn section_ids_match_document() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.element_id()).collect();
        assert_eq!(ids, vec!["secaoLogin", "secaoRegistro", "secaoRelatorio", "secaoListaRelatorios"]);
    }

    #[test]
    fn landing_section_depends_on_token() {
        let anonymous = AppState::new(AuthState::new());
        assert_eq!(Section::landing(anonymous.auth.is_authenticated()), Section::Login);

        let logged = AppState::new(AuthState::with_token(Some("t".into())));
        assert_eq!(Section::landing(logged.auth.is_authenticated()), Section::ReportForm);
    }

    #[test]
    fn cloned_state_shares_the_session() {
        let state = AppState::new(AuthState::new());
        let listener_copy = state.clone();
        listener_copy.auth.set_token(Some("abc".into()));
        assert!(state.auth.is_authenticated());
        state.auth.logout();
        assert!(!listener_copy.auth.is_authenticated());
    }
}
