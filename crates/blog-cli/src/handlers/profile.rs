use crate::context::CliContext;
use crate::output;
use blog_view::ProfileView;

pub async fn handle(ctx: &CliContext, query: Option<String>) -> anyhow::Result<()> {
    let mut view = ProfileView::load(ctx.store(), ctx.author()).await?;
    if let Some(query) = query {
        view.set_query(query);
    }
    output::output_success(view.snapshot())
}
