use crate::cli::{ListArgs, ThemeAction};
use crate::context::CliContext;
use crate::handlers;
use crate::output;
use blog_domain::Route;

pub async fn open(ctx: &CliContext, path: &str) -> anyhow::Result<()> {
    let route = Route::parse(path);
    tracing::debug!("Resolved {} to {:?}", path, route);

    match route {
        Route::Listing { query } => {
            let args = ListArgs {
                query,
                page: 1,
                page_size: None,
            };
            handlers::listing::handle(ctx, args).await
        }
        Route::PostDetail { id } => handlers::post::show(ctx, id).await,
        Route::Profile => handlers::profile::handle(ctx, None).await,
        Route::Settings => handlers::theme::handle(ctx, Some(ThemeAction::Get)).await,
        Route::CreatePost => {
            output::output_error("Use `blog create --title <TITLE> --body <BODY>` to write a post")
        }
        Route::Login | Route::Register => {
            output::output_error("Sign-in is handled by the external authentication provider")
        }
        Route::NotFound => output::output_error(&format!("Page not found: {}", path)),
    }
}
