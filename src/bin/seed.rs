//! Fills the configured database with a few posts, tags and comments.
//!
//! The web interface only reads posts and tags, so this is how they get created.
//! Tags are looked up by name before being created, which makes running the tool twice harmless
//! for tags, but it always adds a fresh set of posts.

use simpleblog::config::db::DB;
use simpleblog::config::AppConfig;
use simpleblog::model::comment::Comment;
use simpleblog::model::post::{Post, PostCreate};
use simpleblog::model::tag::Tag;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

struct SeedPost {
    title: &'static str,
    content: &'static str,
    tags: &'static [&'static str],
    comments: &'static [&'static str],
}

const POSTS: &[SeedPost] = &[
    SeedPost {
        title: "Post The First",
        content: "Content for the first post",
        tags: &["animals", "writing"],
        comments: &["Comment for the first post", "Another comment for the first post"],
    },
    SeedPost {
        title: "Post The Second",
        content: "Content for the second post",
        tags: &["tech", "writing"],
        comments: &["Comment for the second post"],
    },
    SeedPost {
        title: "Post The Third",
        content: "Content for the third post",
        tags: &["cooking", "tech", "writing"],
        comments: &[],
    },
    SeedPost {
        title: "A post on water",
        content: "Water is a liquid at room temperature.",
        tags: &["animals"],
        comments: &["Interesting read", "Water is wet"],
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or("seed=info,simpleblog=info".into()))
        .with(fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    config.validate()?;

    let db = DB::new(&config.db.url, config.db.pool_size).await?;
    db.migrate().await?;

    for seed in POSTS {
        let post = Post::create(
            &db,
            &PostCreate {
                title: seed.title.to_string(),
                content: seed.content.to_string(),
            },
        )
        .await?;

        for name in seed.tags {
            let tag = Tag::find_or_create(&db, name).await?;
            Post::add_tag(&db, post.id, tag.id).await?;
        }

        for content in seed.comments {
            Comment::create(&db, post.id, content).await?;
        }

        info!(
            "created post {} \"{}\" with {} tags and {} comments",
            post.id,
            post.title,
            seed.tags.len(),
            seed.comments.len()
        );
    }

    info!("Seeded {} posts into {}", POSTS.len(), config.db.url);
    Ok(())
}
