use crate::cli::ThemeAction;
use crate::context::CliContext;
use crate::output;
use blog_persistence::ThemePreference;

pub async fn handle(ctx: &CliContext, action: Option<ThemeAction>) -> anyhow::Result<()> {
    let prefs = ThemePreference::new(ctx.store());
    let theme = match action.unwrap_or(ThemeAction::Get) {
        ThemeAction::Get => prefs.load().await?,
        ThemeAction::Set { theme } => {
            prefs.save(theme).await?;
            theme
        }
        ThemeAction::Toggle => prefs.toggle().await?,
    };
    output::output_success(serde_json::json!({ "theme": theme }))
}
