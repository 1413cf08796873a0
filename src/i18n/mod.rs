use serde::{
    Deserialize,
    Serialize,
};

use crate::core::tasks::StoreFailure;

/// Display language. Spanish is the reference default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::Es => "🇪🇸",
            Language::En => "🇺🇸",
        }
    }
}

/// Semantic keys for every user-facing string. The engine never embeds
/// literal text; screens ask for a `Text` and render whatever comes back.
#[derive(Debug, Clone, PartialEq)]
pub enum Text {
    AppTitle,
    Tagline,
    AddDeck,
    DeckListTitle,
    DeckEmptyTitle,
    DeckEmptyDescription,
    CardCount { count: usize },
    PendingPoints { count: i64 },
    ProgressSummary { total: usize, reviewed: usize, success: usize, to_review: usize },
    DeckLoadError { message: String },
    ViewDeck,
    DeleteDeck,
    ConfirmDelete,
    ExitSession,
    NegativeReview { count: usize },
    RoundLabel { round: u32 },
    SessionCompleted,
    AllPositive,
    Step { index: usize, total: usize },
    Score { score: i64 },
    MarkIncorrect,
    MarkCorrect,
    DeckFormTitle,
    DeckFormName,
    DeckFormNamePlaceholder,
    DeckFormFile,
    DeckFormPickFile,
    DeckFormCancel,
    DeckFormSubmit,
    DeckFormUploading,
    DeckFormSuccess,
    HttpStatus { status: u16 },
    ErrorTitle,
    SwitchLanguage,
}

pub fn tr(lang: Language, text: &Text) -> String {
    match lang {
        Language::Es => spanish(text),
        Language::En => english(text),
    }
}

/// Render a store failure the way the reference client does: the server's
/// own message when it sent one, else the status-coded generic.
pub fn failure_text(lang: Language, failure: &StoreFailure) -> String {
    match failure {
        StoreFailure::Message(message) => message.clone(),
        StoreFailure::Status(status) => tr(lang, &Text::HttpStatus { status: *status }),
        StoreFailure::Transport(detail) => detail.clone(),
    }
}

fn spanish(text: &Text) -> String {
    match text {
        Text::AppTitle => "Entrenador de Mazos".into(),
        Text::Tagline => {
            "Organiza tus tarjetas y repásalas con un flujo inteligente".into()
        }
        Text::AddDeck => "Agregar mazo".into(),
        Text::DeckListTitle => "Tus mazos".into(),
        Text::DeckEmptyTitle => "No hay mazos todavía".into(),
        Text::DeckEmptyDescription => {
            "Comienza creando uno nuevo con el botón “Agregar mazo”.".into()
        }
        Text::CardCount { count: 1 } => "1 tarjeta".into(),
        Text::CardCount { count } => format!("{count} tarjetas"),
        Text::PendingPoints { count: 1 } => "1 punto pendiente".into(),
        Text::PendingPoints { count } => format!("{count} puntos pendientes"),
        Text::ProgressSummary { total, reviewed, success, to_review } => format!(
            "De {total} cartas has revisado {reviewed}, con {success} exitosas y {to_review} por repasar"
        ),
        Text::DeckLoadError { message } => format!("Error al cargar mazos: {message}"),
        Text::ViewDeck => "👁 Ver".into(),
        Text::DeleteDeck => "Eliminar".into(),
        Text::ConfirmDelete => {
            "¿Eliminar este mazo? Esta acción no se puede deshacer.".into()
        }
        Text::ExitSession => "← Volver".into(),
        Text::NegativeReview { count } => format!("Revisión de negativos ({count})"),
        Text::RoundLabel { round } => format!("Recorrido {round}"),
        Text::SessionCompleted => {
            "¡Recorrido completado! No quedan tarjetas pendientes.".into()
        }
        Text::AllPositive => "¡Bien hecho! Todas las tarjetas están en positivo.".into(),
        Text::Step { index, total } => format!("Tarjeta {index} de {total}"),
        Text::Score { score } => format!("Aciertos: {score}"),
        Text::MarkIncorrect => "✕ No entendí".into(),
        Text::MarkCorrect => "✓ Comprendido".into(),
        Text::DeckFormTitle => "Nuevo mazo".into(),
        Text::DeckFormName => "Nombre del mazo".into(),
        Text::DeckFormNamePlaceholder => "Ej. Vocabulario básico".into(),
        Text::DeckFormFile => "Archivo de tarjetas (JSON o Excel)".into(),
        Text::DeckFormPickFile => "Elegir archivo…".into(),
        Text::DeckFormCancel => "Cancelar".into(),
        Text::DeckFormSubmit => "Guardar mazo".into(),
        Text::DeckFormUploading => "Subiendo mazo...".into(),
        Text::DeckFormSuccess => "Mazo creado con éxito".into(),
        Text::HttpStatus { status } => format!("Error {status}"),
        Text::ErrorTitle => "Algo salió mal".into(),
        Text::SwitchLanguage => "Cambiar idioma a inglés".into(),
    }
}

fn english(text: &Text) -> String {
    match text {
        Text::AppTitle => "Deck Trainer".into(),
        Text::Tagline => "Organize your cards and review them with a smart flow".into(),
        Text::AddDeck => "Add deck".into(),
        Text::DeckListTitle => "Your decks".into(),
        Text::DeckEmptyTitle => "No decks yet".into(),
        Text::DeckEmptyDescription => {
            "Create a new one using the “Add deck” button.".into()
        }
        Text::CardCount { count: 1 } => "1 card".into(),
        Text::CardCount { count } => format!("{count} cards"),
        Text::PendingPoints { count: 1 } => "1 pending point".into(),
        Text::PendingPoints { count } => format!("{count} pending points"),
        Text::ProgressSummary { total, reviewed, success, to_review } => format!(
            "Out of {total} cards you have reviewed {reviewed}, with {success} successes and {to_review} to review"
        ),
        Text::DeckLoadError { message } => format!("Error loading decks: {message}"),
        Text::ViewDeck => "👁 View".into(),
        Text::DeleteDeck => "Delete".into(),
        Text::ConfirmDelete => "Delete this deck? This action cannot be undone.".into(),
        Text::ExitSession => "← Back".into(),
        Text::NegativeReview { count } => format!("Negative review ({count})"),
        Text::RoundLabel { round } => format!("Round {round}"),
        Text::SessionCompleted => "Run completed! No cards pending.".into(),
        Text::AllPositive => "Great job! All cards are positive.".into(),
        Text::Step { index, total } => format!("Card {index} of {total}"),
        Text::Score { score } => format!("Correct answers: {score}"),
        Text::MarkIncorrect => "✕ Didn’t get it".into(),
        Text::MarkCorrect => "✓ Got it".into(),
        Text::DeckFormTitle => "New deck".into(),
        Text::DeckFormName => "Deck name".into(),
        Text::DeckFormNamePlaceholder => "E.g. Basic vocabulary".into(),
        Text::DeckFormFile => "Card file (JSON or Excel)".into(),
        Text::DeckFormPickFile => "Choose file…".into(),
        Text::DeckFormCancel => "Cancel".into(),
        Text::DeckFormSubmit => "Save deck".into(),
        Text::DeckFormUploading => "Uploading deck...".into(),
        Text::DeckFormSuccess => "Deck created successfully".into(),
        Text::HttpStatus { status } => format!("Error {status}"),
        Text::ErrorTitle => "Something went wrong".into(),
        Text::SwitchLanguage => "Switch language to Spanish".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_is_the_default_language() {
        assert_eq!(Language::default(), Language::Es);
    }

    #[test]
    fn plural_forms_follow_the_count() {
        assert_eq!(tr(Language::Es, &Text::CardCount { count: 1 }), "1 tarjeta");
        assert_eq!(tr(Language::Es, &Text::CardCount { count: 4 }), "4 tarjetas");
        assert_eq!(tr(Language::En, &Text::PendingPoints { count: 1 }), "1 pending point");
    }

    #[test]
    fn step_and_round_labels_interpolate() {
        assert_eq!(tr(Language::Es, &Text::Step { index: 2, total: 5 }), "Tarjeta 2 de 5");
        assert_eq!(tr(Language::En, &Text::RoundLabel { round: 3 }), "Round 3");
        assert_eq!(
            tr(Language::En, &Text::NegativeReview { count: 2 }),
            "Negative review (2)"
        );
    }

    #[test]
    fn failure_text_prefers_the_server_message() {
        let lang = Language::Es;
        assert_eq!(
            failure_text(lang, &StoreFailure::Message("Mazo no encontrado".into())),
            "Mazo no encontrado"
        );
        assert_eq!(failure_text(lang, &StoreFailure::Status(500)), "Error 500");
    }

    #[test]
    fn language_toggle_round_trips() {
        assert_eq!(Language::Es.toggled(), Language::En);
        assert_eq!(Language::Es.toggled().toggled(), Language::Es);
    }
}
