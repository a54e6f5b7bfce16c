mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚚 Fuel Transport Tracking API");
    info!("==============================");

    let config = EnvironmentConfig::from_env();

    // Inicializar base de datos
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if let Err(e) = database::run_migrations(&pool).await {
        error!("❌ Error ejecutando migraciones: {}", e);
        return Err(anyhow::anyhow!("Error de migraciones: {}", e));
    }
    info!("✅ Migraciones aplicadas");

    let addr = config.server_addr();
    let app_state = AppState::new(pool, config);
    let app = routes::create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("👤 Usuarios:");
    info!("   POST /api/users/login - Login");
    info!("   CRUD /api/users");
    info!("⛽ Flota:");
    info!("   CRUD /api/transports");
    info!("   PATCH /api/transports/:id/status - Cambio de estado (requiere token)");
    info!("   CRUD /api/depots");
    info!("   CRUD /api/terminals");
    info!("📍 Seguimiento:");
    info!("   POST/GET/DELETE /api/checkpoints");
    info!("   CRUD /api/flowmeter");
    info!("   CRUD /api/fuelquality");
    info!("📄 Documentos:");
    info!("   POST /api/documents/upload - Upload multipart");
    info!("   GET  /uploads/:file - Archivos subidos");
    info!("📝 Auditoría:");
    info!("   POST/GET /api/activitylogs");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
