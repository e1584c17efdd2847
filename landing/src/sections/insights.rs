use super::{ErrorNotice, Reveal};
use leptos::prelude::*;
use nova_core::ServiceError;
use nova_core::types::Article;

/// "Latest Insights": one card per article, in the order the service
/// returned them.
#[component]
pub fn Insights(
    articles: Vec<Article>,
    #[prop(default = None)] error: Option<ServiceError>,
) -> impl IntoView {
    view! {
        <section class="insights">
            <div class="container">
                <div class="section-header split-header">
                    <div>
                        <p class="kicker">"Perspectives"</p>
                        <h2 class="section-heading">"Latest Insights"</h2>
                    </div>
                    <a href="#/" class="text-link desktop-only">"View all articles"</a>
                </div>
                {error.map(|error| view! { <ErrorNotice error=error /> })}
                <ArticleGrid articles=articles />
            </div>
        </section>
    }
}

#[component]
pub fn ArticleGrid(articles: Vec<Article>) -> impl IntoView {
    let indexed: Vec<(usize, Article)> = articles.into_iter().enumerate().collect();
    view! {
        <div class="article-grid">
            <For
                each=move || indexed.clone()
                key=|(_, article): &(usize, Article)| article.id.clone()
                children=|(index, article): (usize, Article)| view! { <ArticleCard article=article index=index /> }
            />
        </div>
    }
}

#[component]
pub fn ArticleCard(article: Article, index: usize) -> impl IntoView {
    let thumbnail = format!("https://picsum.photos/600/400?random={index}");
    let delay = u32::try_from(index).unwrap_or(0) * 100;
    let date = article.display_date();

    view! {
        <Reveal class="article-card-shell" delay_ms=delay>
            <article class="article-card" data-article-id=article.id>
                <div class="article-thumb">
                    <img src=thumbnail alt="Article thumbnail" />
                    <span class="article-category">{article.category}</span>
                </div>
                <div class="article-body">
                    <h3 class="article-title">{article.title}</h3>
                    <p class="article-excerpt">{article.excerpt}</p>
                    <div class="article-meta">
                        <span class="article-author">{article.author}</span>
                        <time datetime=article.published_at>{date}</time>
                    </div>
                </div>
            </article>
        </Reveal>
    }
}
