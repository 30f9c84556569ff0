use crate::cli::CreateArgs;
use crate::context::CliContext;
use crate::output;
use blog_core::BlogError;
use blog_domain::PostId;
use blog_persistence::PostJournal;
use blog_view::ListingSession;

pub async fn show(ctx: &CliContext, id: PostId) -> anyhow::Result<()> {
    let session = ListingSession::new(ctx.source()?, ctx.view_config(None).await?);
    match session.post_detail(id).await {
        Ok(post) => output::output_success(&post),
        Err(BlogError::NotFound(_)) => output::output_error(&format!("Post not found: {}", id)),
        Err(BlogError::Fetch(e)) => output::output_error(e.user_message()),
        Err(e) => Err(e.into()),
    }
}

pub async fn create(ctx: &CliContext, args: CreateArgs) -> anyhow::Result<()> {
    let journal = PostJournal::new(ctx.store());
    match journal.create(&args.title, &args.body, ctx.author()).await {
        Ok(post) => output::output_success(&post),
        Err(BlogError::Validation(message)) => output::output_error(&message),
        Err(e) => Err(e.into()),
    }
}
