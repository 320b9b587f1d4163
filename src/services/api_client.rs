// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// Un intento por request: sin retries, el fallo se devuelve al store.
// ============================================================================

use gloo_net::http::{Request, Response};

use crate::models::{
    AuthError, AuthErrorBody, DeleteResponse, LoginRequest, RegisterRequest, Session, Treatment,
    TreatmentFields,
};
use crate::utils::constants::BACKEND_URL;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Login (POST /auth/login)
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let url = format!("{}/auth/login", self.base_url);
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Iniciando sesión para: {}", email);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| AuthError::transport(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| AuthError::transport(format!("Network error: {}", e)))?;

        Self::session_or_auth_error(response).await
    }

    /// Registro (POST /auth/register)
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let url = format!("{}/auth/register", self.base_url);
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        log::info!("📝 Registrando usuario: {}", email);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| AuthError::transport(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| AuthError::transport(format!("Network error: {}", e)))?;

        Self::session_or_auth_error(response).await
    }

    /// Listar tratamientos del usuario (GET /treatments)
    pub async fn list_treatments(&self, token: &str) -> Result<Vec<Treatment>, String> {
        let url = format!("{}/treatments", self.base_url);
        let response = Request::get(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(Self::error_message(&response, "Failed to fetch treatments").await);
        }
        response
            .json::<Vec<Treatment>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Crear tratamiento (POST /treatments). El servidor devuelve el registro
    /// canónico con su id.
    pub async fn create_treatment(
        &self,
        token: &str,
        fields: &TreatmentFields,
    ) -> Result<Treatment, String> {
        let url = format!("{}/treatments", self.base_url);

        log::info!("💊 Creando tratamiento: {}", fields.name);

        let response = Request::post(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .json(fields)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(Self::error_message(&response, "Failed to add treatment").await);
        }
        response
            .json::<Treatment>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Borrar tratamiento (DELETE /treatments/{id}). Solo cuenta como éxito
    /// si el servidor responde `success: true`, aunque el HTTP sea 2xx.
    pub async fn delete_treatment(&self, token: &str, id: &str) -> Result<(), String> {
        let url = format!("{}/treatments/{}", self.base_url, id);

        log::info!("🗑️ Borrando tratamiento: {}", id);

        let response = Request::delete(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(Self::error_message(&response, "Failed to delete treatment").await);
        }

        let result = response
            .json::<DeleteResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        if result.success {
            Ok(())
        } else {
            Err(result
                .message
                .unwrap_or_else(|| "Failed to delete treatment".to_string()))
        }
    }

    /// Respuesta de auth: 2xx ⇒ sesión; si no, mensaje + errores por campo
    /// + status del cuerpo de error
    async fn session_or_auth_error(response: Response) -> Result<Session, AuthError> {
        if response.ok() {
            return response
                .json::<Session>()
                .await
                .map_err(|e| AuthError::transport(format!("Parse error: {}", e)));
        }

        let status = response.status();
        let status_text = response.status_text();
        let body = response.json::<AuthErrorBody>().await.unwrap_or_default();
        let message = body
            .message
            .or(body.error)
            .unwrap_or_else(|| format!("HTTP {}: {}", status, status_text));

        Err(AuthError {
            message,
            field_errors: body.errors,
            status_code: Some(status),
        })
    }

    /// Mensaje de error de una respuesta no-2xx: usa `message`/`error` del
    /// cuerpo si existe, si no el mensaje por defecto de la operación
    async fn error_message(response: &Response, fallback: &str) -> String {
        log::error!("❌ HTTP {}: {}", response.status(), response.status_text());
        let body = response.json::<AuthErrorBody>().await.unwrap_or_default();
        Self::error_message_from(body, fallback)
    }

    fn error_message_from(body: AuthErrorBody, fallback: &str) -> String {
        body.message
            .or(body.error)
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_body_over_fallback() {
        let body: AuthErrorBody =
            serde_json::from_str(r#"{"message":"Treatment not found"}"#).unwrap();
        assert_eq!(
            ApiClient::error_message_from(body, "Failed to delete treatment"),
            "Treatment not found"
        );

        let body: AuthErrorBody = serde_json::from_str(r#"{"error":"Invalid token"}"#).unwrap();
        assert_eq!(
            ApiClient::error_message_from(body, "Failed to fetch treatments"),
            "Invalid token"
        );
    }

    #[test]
    fn error_message_falls_back_per_operation() {
        assert_eq!(
            ApiClient::error_message_from(AuthErrorBody::default(), "Failed to fetch treatments"),
            "Failed to fetch treatments"
        );
        assert_eq!(
            ApiClient::error_message_from(AuthErrorBody::default(), "Failed to add treatment"),
            "Failed to add treatment"
        );
    }
}
