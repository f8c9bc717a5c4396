// Textos de la interfaz (pt-BR)

pub const LOGIN_REQUIRED_SECTION: &str = "Você precisa estar logado para acessar esta seção!";
pub const LOGIN_REQUIRED_CREATE: &str = "Você precisa estar logado para criar um relatório!";
pub const LOGIN_REQUIRED_LIST: &str = "Você precisa estar logado para listar relatórios!";
pub const LOGIN_REQUIRED: &str = "Você precisa estar logado!";

pub const REGISTER_SUCCESS: &str = "Conta criada com sucesso! Redirecionando para login...";
pub const LOGIN_SUCCESS: &str = "Login realizado com sucesso!";
pub const LOGIN_INVALID: &str = "Erro: Credenciais inválidas!";
pub const LOGOUT_SUCCESS: &str = "Logout realizado com sucesso!";

pub const TOKEN_EXPIRED_CREATE: &str = "Erro: Token expirado ou inválido. Faça login novamente.";
pub const TOKEN_EXPIRED: &str = "Token expirado ou inválido. Faça login novamente.";

pub const PDF_ERROR: &str = "Erro ao gerar PDF";

pub const LIST_LOADING: &str = "Carregando relatórios...";
pub const LIST_EMPTY: &str = "Nenhum relatório encontrado. Crie um novo relatório para começar!";
pub const LIST_ERROR: &str = "Erro ao listar relatórios";

pub fn connection_error(detail: &str) -> String {
    format!("Erro de conexão: {}", detail)
}

pub fn register_error(detail: &str) -> String {
    format!("Erro ao criar conta: {}", detail)
}

pub fn report_created(id: i64) -> String {
    format!("Relatório criado com sucesso! ID: {}", id)
}

pub fn create_report_error(detail: &str) -> String {
    format!("Erro ao criar relatório: {}", detail)
}
