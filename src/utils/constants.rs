/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:8000/api (por defecto)
/// - Producción: via BACKEND_URL env var
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8000/api",
};

/// Clave de localStorage con la sesión serializada
pub const STORAGE_KEY_USER: &str = "treatmentTracker_user";
