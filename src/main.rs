use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use transit_backend::{
    build_router,
    config::environment::EnvironmentConfig,
    database::DatabaseConnection,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Carregar variáveis de ambiente
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🚌 Transporte Coletivo Santa Terezinha - API");
    info!("============================================");

    let config = EnvironmentConfig::from_env()?;

    // Inicializar base de dados
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Erro conectando à base de dados: {:#}", e);
            return Err(e);
        }
    };

    if config.run_migrations {
        db_connection.run_migrations().await?;
    }

    let addr = config.server_url();
    let base = config.api_base_path.clone();
    if config.require_auth {
        info!("🔐 Autenticação obrigatória nas escritas");
    } else if config.is_production() {
        warn!("⚠️ REQUIRE_AUTH desligado em produção: escritas sem token");
    }

    let app = build_router(AppState::new(db_connection.pool().clone(), config));

    info!("🌐 Servidor iniciando em http://{}", addr);
    info!("🔍 Endpoints disponíveis:");
    info!("   GET  /health - Health check");
    info!("   POST {}/login - Login", base);
    info!("   GET  {}/rotas - Rotas ativas com horários", base);
    info!("   GET|POST {}/avisos, PUT|DELETE {}/avisos/:id", base, base);
    info!("   GET|POST {}/chamados, PUT|DELETE {}/chamados/:id", base, base);
    info!("   GET|POST {}/escalas, PUT {}/escalas/:id", base, base);
    info!("   GET|POST {}/mensagens, PUT {}/mensagens/:id", base, base);
    info!("   GET  {}/veiculos - Frota", base);
    info!("   GET  {}/dashboard - Painel do gestor", base);
    info!("   GET  {}/usuarios/motoristas - Motoristas ativos", base);
    info!("   GET|POST {}/inicio-linha, GET {}/inicio-linha/ativo", base, base);
    info!("   GET  {}/horario-passagem/:rota_id[/:lat/:lng]", base);
    info!("   POST {}/checklist - Checklist de manutenção", base);

    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Erro do servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor encerrado");
    Ok(())
}

/// Sinal de desligamento graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ Falha ao instalar o handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ Falha ao instalar o handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Sinal Ctrl+C recebido, encerrando servidor...");
        },
        _ = terminate => {
            info!("🛑 Sinal de término recebido, encerrando servidor...");
        },
    }
}
