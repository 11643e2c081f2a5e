use anyhow::Result;
use atelier_site::models::{BlogPostPatch, NewBlogPost};
use atelier_site::setup;

#[tokio::main]
async fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|e| {
        println!("Atelier closed unexpectedly: {e:?}");
    }));
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let data_dir = directories::ProjectDirs::from("com", "atelier", "atelier-site")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("atelier-site"));
    log::info!("Using data dir {}", data_dir.display());

    let app = setup::init(data_dir).await?;

    log::info!(
        "Loaded {} published posts, theme {}",
        app.blog.list_published().len(),
        app.settings.theme
    );
    log::info!(
        "Push supported: {}, enabled: {}",
        app.notifications.push_supported(),
        app.notifications.is_push_enabled().await
    );

    // Walk the flows the site exercises: opt into push, draft a post, publish
    // it, then read the toasts the presentation layer would render.
    app.notifications.enable_push().await;

    let draft = app
        .blog
        .add_post(NewBlogPost {
            title: "Hello from the headless demo".to_string(),
            slug: "hello-headless-demo".to_string(),
            content: "# Hello\n\nThis post only exists for the demo run.".to_string(),
            excerpt: "Demo post.".to_string(),
            tags: vec!["Demo".to_string()],
            published: false,
            reading_time: 1,
        })
        .await?;

    app.blog
        .update_post(
            &draft.id,
            BlogPostPatch {
                published: Some(true),
                ..Default::default()
            },
        )
        .await?;

    for toast in app.notifications.toasts().list() {
        log::info!(
            "[toast {:?}] {} {}: {}",
            toast.kind,
            toast.display_icon(),
            toast.title,
            toast.message
        );
    }
    log::info!("Unread blog badge: {}", app.notifications.new_blog_count());
    app.notifications.clear_blog_badge();

    // Leave the store the way we found it
    app.blog.delete_post(&draft.id)?;
    app.notifications.disable_push().await;

    Ok(())
}
