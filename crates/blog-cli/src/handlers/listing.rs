use crate::cli::ListArgs;
use crate::context::CliContext;
use crate::output;
use blog_view::ListingSession;

pub async fn handle(ctx: &CliContext, args: ListArgs) -> anyhow::Result<()> {
    let view_config = ctx.view_config(args.page_size).await?;
    let mut session = ListingSession::new(ctx.source()?, view_config);

    match args.query {
        Some(query) => session.activate_with_query(query),
        None => session.activate(),
    };
    session.settle().await;
    session.request_page(args.page);

    output::output_success(session.snapshot())
}
