//! User-facing text. The app speaks Brazilian Portuguese, matching the
//! `pt-BR` locale it requests from the API.

pub const APP_TITLE: &str = "FMDB";
pub const DETAIL_TITLE: &str = "Detalhes do Filme";
pub const LOADING: &str = "Carregando...";

pub const NO_MOVIES_FOUND: &str = "Nenhum filme encontrado.";
pub const DETAIL_UNAVAILABLE: &str = "Não foi possível carregar os detalhes do filme.";
pub const RETRY: &str = "Tentar Novamente";

pub const RELEASE_DATE_LABEL: &str = "Data de Lançamento";
pub const UNKNOWN_DATE: &str = "Data desconhecida";
/// Grid cells only show the year; this stands in when there is none.
pub const UNKNOWN_YEAR: &str = "s.d.";
pub const SYNOPSIS_HEADING: &str = "Sinopse";
pub const SYNOPSIS_UNAVAILABLE: &str = "Sinopse indisponível";
pub const VOTES: &str = "votos";
pub const RUNTIME_LABEL: &str = "Duração";

pub const HELP_LIST: &str = "←↑↓→ navegar · Enter detalhes · q sair";
pub const HELP_DETAIL: &str = "↑↓ rolar · Esc voltar · q sair";
pub const HELP_ERROR: &str = "r tentar novamente · q sair";
pub const HELP_ERROR_DETAIL: &str = "r tentar novamente · Esc voltar · q sair";
