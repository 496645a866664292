//! Localized texts the orchestrator writes itself

use super::query::Locale;

/// Built-in user-facing messages
pub struct UserMessage;

impl UserMessage {
    /// Reply sent when both the parallel path and its fallback failed
    pub fn processing_failed(locale: Locale) -> &'static str {
        match locale {
            Locale::Es => {
                "Lo siento, tuve un problema procesando tu mensaje. Por favor, intenta de nuevo más tarde."
            }
            Locale::En => {
                "Sorry, I had a problem processing your message. Please try again later."
            }
        }
    }

    /// Reply sent when the inbound message has no text
    pub fn empty_query(locale: Locale) -> &'static str {
        match locale {
            Locale::Es => {
                "No recibí ningún mensaje. Pregúntame sobre viajes, destinos, alojamientos o experiencias."
            }
            Locale::En => {
                "I didn't receive a message. Ask me about trips, destinations, lodging or experiences."
            }
        }
    }
}
