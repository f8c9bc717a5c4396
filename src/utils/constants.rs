/// Clave de localStorage para el token JWT
pub const TOKEN_STORAGE_KEY: &str = "tokenJWT";

// ----------------------------------------------------------------------------
// IDs del documento (index.html)
// ----------------------------------------------------------------------------

pub const FORM_LOGIN: &str = "formLogin";
pub const FORM_REGISTER: &str = "formRegistro";
pub const FORM_REPORT: &str = "formRelatorio";

pub const LOGIN_USERNAME: &str = "loginUsername";
pub const LOGIN_PASSWORD: &str = "loginPassword";
pub const REGISTER_USERNAME: &str = "registroUsername";
pub const REGISTER_PASSWORD: &str = "registroPassword";

pub const LOGIN_MESSAGE: &str = "loginMensagem";
pub const REGISTER_MESSAGE: &str = "registroMensagem";
pub const REPORT_MESSAGE: &str = "relatorioMensagem";

pub const REPORT_LIST_CONTAINER: &str = "listaRelatorios";

/// Campos del formulario de relatório, en orden
pub const REPORT_FIELD_IDS: [&str; 7] = [
    "titulo",
    "descricao",
    "autor",
    "crm",
    "largura",
    "comprimento",
    "espessura",
];

/// Clase de todas las secciones y clase de la sección visible
pub const SECTION_CLASS: &str = "secao";
pub const ACTIVE_SECTION_CLASS: &str = "secao-ativa";
