//! AI stylist service.
//!
//! Mediates exactly one request/response cycle with Gemini per submission
//! and guarantees a displayable string in every case: no error ever
//! reaches the caller. The three fallback strings are fixed, user-facing
//! French copy.
//!
//! Callers are responsible for rejecting empty or whitespace-only
//! queries; the service performs no input validation.

use tracing::instrument;

use crate::config::GeminiConfig;
use crate::gemini::GeminiClient;

/// Persona instruction prepended to every request. Not user-controllable.
const SYSTEM_INSTRUCTION: &str = "\
Tu es un styliste de mode expert pour \"Fripoblech\", un site de vente de vêtements de seconde main haut de gamme.

Ton ton doit être :
- Tendance et dynamique.
- Encourageant pour la mode durable (seconde main).
- Professionnel mais accessible.

Nous vendons trois catégories principales :
1. Chic (Marques comme Gucci, Dior, Zara, Ralph Lauren).
2. Sport (Nike, Adidas, Asics).
3. Chaussures (Sneakers, Bottines, Mocassins).

Si l'utilisateur cherche quelque chose, suggère des tenues en combinant ces marques et catégories. Sois concis (max 3 phrases).
Réponds toujours en Français.";

/// Shown when no API key is configured. No network call is attempted.
pub const UNAVAILABLE_MESSAGE: &str =
    "Désolé, le service d'Assistant Styliste est momentanément indisponible (API Key manquante).";

/// Shown when the API succeeded but returned no usable text.
pub const EMPTY_ANSWER_MESSAGE: &str = "Je n'ai pas pu générer de conseil pour le moment.";

/// Shown on any transport or API failure.
pub const ERROR_MESSAGE: &str =
    "Une erreur est survenue lors de la consultation de votre styliste virtuel.";

/// The AI stylist.
#[derive(Clone)]
pub struct StylistService {
    client: Option<GeminiClient>,
}

impl StylistService {
    /// Create the service from configuration.
    ///
    /// A missing API key yields a service that answers every query with
    /// [`UNAVAILABLE_MESSAGE`].
    #[must_use]
    pub fn new(config: &GeminiConfig) -> Self {
        Self {
            client: GeminiClient::from_config(config),
        }
    }

    /// Create the service around an existing client. Used by tests to
    /// point the client at a stub endpoint.
    #[must_use]
    pub const fn with_client(client: Option<GeminiClient>) -> Self {
        Self { client }
    }

    /// Get styling advice for a free-text query.
    ///
    /// Always resolves to a displayable string: the model's answer, or
    /// one of the fixed fallbacks. Failures are logged for diagnostics
    /// and never propagated.
    #[instrument(skip(self, user_query))]
    pub async fn advise(&self, user_query: &str) -> String {
        let Some(client) = &self.client else {
            return UNAVAILABLE_MESSAGE.to_string();
        };

        match client.generate(SYSTEM_INSTRUCTION, user_query).await {
            Ok(response) => response
                .text()
                .map_or_else(|| EMPTY_ANSWER_MESSAGE.to_string(), ToOwned::to_owned),
            Err(e) => {
                tracing::error!("Stylist request failed: {e}");
                ERROR_MESSAGE.to_string()
            }
        }
    }
}
