//! Print the dev-server and bundler options as JSON.

/// Environment variable selecting the [`build_options::Profile`].
const PROFILE_ENV_VAR: &str = "BUILD_OPTIONS_PROFILE";

fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let profile: build_options::Profile = envfury::or(PROFILE_ENV_VAR, Default::default())?;
    let env = build_options::Env::from_process()?;

    tracing::debug!(?profile, ?env, "computing build options");

    let options = build_options::BuildOptions::new(profile, &env);
    let json = serde_json::to_string_pretty(&options)?;
    println!("{json}");

    Ok(())
}
