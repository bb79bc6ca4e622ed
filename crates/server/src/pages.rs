//! HTML pages for the web UI.
//!
//! The UI is a fixed set of [`Page`]s. Building what a page shows is a pure
//! function of the orchestrator and the request input ([`recommend_view`]);
//! turning that into markup is a second pure function ([`render_recommend`]).
//! Neither touches the recommendation state.

use pipeline::{Lookup, Suggestion};

use crate::config::ServerConfig;
use crate::orchestrator::{MovieRecommendation, RecommendationOrchestrator};

/// The pages reachable from the navigation sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Recommend,
    About,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Recommend, Page::About];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Recommend => "Recommend",
            Page::About => "About",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Recommend => "/recommend",
            Page::About => "/about",
        }
    }
}

/// What the user typed on the Recommend page
#[derive(Debug, Clone, Default)]
pub struct RecommendInput {
    pub title: Option<String>,
    pub count: Option<usize>,
}

/// Result section of the Recommend page
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing typed yet
    Idle,
    Recommendations(Vec<MovieRecommendation>),
    /// Title exists but nothing could be recommended
    NoRecommendations,
    NotFound,
}

/// Everything the Recommend page displays
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendView {
    pub query: String,
    pub count: usize,
    pub max_count: usize,
    pub suggestions: Vec<Suggestion>,
    pub outcome: Outcome,
}

/// Decide what the Recommend page shows for this input
pub fn recommend_view(
    orchestrator: &RecommendationOrchestrator,
    config: &ServerConfig,
    input: &RecommendInput,
) -> RecommendView {
    // Titles match exactly, same as the JSON API; only a blank box is idle
    let query = input.title.clone().unwrap_or_default();
    let count = config.clamp_count(input.count.unwrap_or(config.default_count));

    if query.trim().is_empty() {
        return RecommendView {
            query,
            count,
            max_count: config.max_count,
            suggestions: Vec::new(),
            outcome: Outcome::Idle,
        };
    }

    let suggestions =
        orchestrator.get_suggestions(&query, config.suggest_limit, config.suggest_min_score);

    let outcome = match orchestrator.get_recommendations(&query, count) {
        Lookup::Found(recs) if recs.is_empty() => Outcome::NoRecommendations,
        Lookup::Found(recs) => Outcome::Recommendations(recs),
        Lookup::NotFound => Outcome::NotFound,
    };

    RecommendView {
        query,
        count,
        max_count: config.max_count,
        suggestions,
        outcome,
    }
}

/// Escape text for HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn recommend_link(title: &str, count: usize) -> String {
    format!(
        "/recommend?title={}&amp;count={}",
        urlencoding::encode(title),
        count
    )
}

const STYLE: &str = "\
body{margin:0;font-family:sans-serif;display:flex;min-height:100vh}\
nav{width:220px;background:#1f2430;color:#eee;padding:1.5rem}\
nav a{display:block;color:#eee;padding:.4rem 0;text-decoration:none}\
nav a.active{font-weight:bold;color:#ffb703}\
main{flex:1;padding:2rem;max-width:60rem}\
.error{color:#b00020}.warning{color:#a15c00}\
.suggestion{display:inline-block;margin:.2rem;padding:.3rem .6rem;border:1px solid #888;border-radius:4px}\
.score{color:#666;font-size:.9em}";

/// Wrap a page body in the shared layout and navigation sidebar
pub fn layout(active: Page, body: &str) -> String {
    let nav: String = Page::ALL
        .iter()
        .map(|&page| {
            let class = if page == active { " class=\"active\"" } else { "" };
            format!("<a href=\"{}\"{}>{}</a>", page.path(), class, page.label())
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Movie Recommendation System - {label}</title>\n<style>{STYLE}</style>\n</head>\n\
         <body>\n<nav>\n<h2>🎥 Movie Recommender</h2>\n<p>Explore movies tailored to your taste</p>\n<hr>\n\
         <h3>Navigation</h3>\n{nav}\n</nav>\n<main>\n{body}\n</main>\n</body>\n</html>\n",
        label = active.label(),
    )
}

pub fn render_home() -> String {
    layout(
        Page::Home,
        "<h1>Welcome to the Movie Recommendation System</h1>\n\
         <p>Discover movies tailored to your taste with our content-based recommendation engine.</p>\n\
         <h3>How It Works:</h3>\n<ul>\n\
         <li>Enter your favorite movie on the <a href=\"/recommend\">recommendation page</a>.</li>\n\
         <li>Receive movies with the most similar genres and storylines.</li>\n\
         <li>Enjoy exploring new titles!</li>\n</ul>",
    )
}

pub fn render_about(orchestrator: &RecommendationOrchestrator) -> String {
    let body = format!(
        "<h1>About This App</h1>\n\
         <p>This app recommends movies using content-based filtering: each movie's genres and \
         synopsis become a bag-of-words vector, and movies are ranked by cosine similarity.</p>\n\
         <h3>Features:</h3>\n<ul>\n\
         <li><strong>Fuzzy Movie Search</strong>: type part of a title, or misspell it, and we'll suggest matches.</li>\n\
         <li><strong>Custom Recommendations</strong>: pick how many similar movies you want.</li>\n\
         <li><strong>JSON API</strong>: the same data under <code>/api/v1</code>.</li>\n</ul>\n\
         <p class=\"score\">Catalog: {} movies, {} vocabulary terms.</p>",
        orchestrator.catalog().len(),
        orchestrator.vocabulary_size(),
    );
    layout(Page::About, &body)
}

pub fn render_recommend(view: &RecommendView) -> String {
    let mut body = String::from(
        "<h1>Movie Recommendations 🎬</h1>\n\
         <p>Type your favorite movie title below, and we'll recommend similar ones.</p>\n",
    );

    let options: String = (1..=view.max_count)
        .map(|n| {
            let selected = if n == view.count { " selected" } else { "" };
            format!("<option value=\"{n}\"{selected}>{n}</option>")
        })
        .collect();

    body.push_str(&format!(
        "<form method=\"get\" action=\"/recommend\">\n\
         <label>Start typing a movie title: <input type=\"text\" name=\"title\" value=\"{}\"></label>\n\
         <label>Number of recommendations: <select name=\"count\">{}</select></label>\n\
         <button type=\"submit\">Recommend</button>\n</form>\n",
        escape_html(&view.query),
        options,
    ));

    if !view.suggestions.is_empty() {
        body.push_str("<p>Did you mean:</p>\n<div>\n");
        for suggestion in &view.suggestions {
            body.push_str(&format!(
                "<a class=\"suggestion\" href=\"{}\">{}</a>\n",
                recommend_link(&suggestion.title, view.count),
                escape_html(&suggestion.title),
            ));
        }
        body.push_str("</div>\n");
    }

    match &view.outcome {
        Outcome::Idle => {}
        Outcome::Recommendations(recs) => {
            body.push_str(&format!(
                "<h2>Recommendations for '{}':</h2>\n<ol>\n",
                escape_html(&view.query)
            ));
            for rec in recs {
                body.push_str(&format!(
                    "<li>🎥 <a href=\"{}\">{}</a> <span class=\"score\">({}, similarity {:.2})</span></li>\n",
                    recommend_link(&rec.title, view.count),
                    escape_html(&rec.title),
                    escape_html(&rec.genres.join(", ")),
                    rec.score,
                ));
            }
            body.push_str("</ol>\n");
        }
        Outcome::NoRecommendations => {
            body.push_str("<p class=\"warning\">No recommendations found for the selected movie.</p>\n");
        }
        Outcome::NotFound => {
            body.push_str(
                "<p class=\"error\">Movie not found! Please check the title or pick a suggestion.</p>\n",
            );
        }
    }

    layout(Page::Recommend, &body)
}
