use u3d::{AppConfig, U3dApp};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = U3dApp::new(AppConfig::default())?;
    app.run()?;
    Ok(())
}
