//! Preview and copy-text rendering for generated content.

use std::fmt::Write;

use pulldown_cmark::{html, Event, Options, Parser};

use crate::models::{ContentStrategy, GooglePost, InstagramPost};

/// Render blog Markdown to HTML. Raw HTML in the source is dropped.
pub fn blog_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH)
        .filter(|event| !matches!(event, Event::Html(_) | Event::InlineHtml(_)));
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Space-separated hashtags, each with exactly one leading `#`.
pub fn instagram_hashtags(post: &InstagramPost) -> String {
    post.hashtags
        .iter()
        .map(|tag| tag.trim().trim_start_matches('#'))
        .filter(|tag| !tag.is_empty())
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Caption followed by the hashtag line, ready to paste into Instagram.
pub fn instagram_copy_text(post: &InstagramPost) -> String {
    let hashtags = instagram_hashtags(post);
    if hashtags.is_empty() {
        post.caption.clone()
    } else {
        format!("{}\n\n{hashtags}", post.caption)
    }
}

pub fn google_post_copy_text(post: &GooglePost) -> String {
    format!("{}\n\n{}", post.title, post.content)
}

/// Markdown outline of a content strategy.
pub fn strategy_markdown(strategy: &ContentStrategy) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Content Strategy\n\n{}\n", strategy.overview);

    let audience = &strategy.target_audience;
    let _ = writeln!(out, "## Target Audience\n\n{}\n", audience.demographics);
    push_list(&mut out, "### Interests", &audience.interests);
    push_list(&mut out, "### Pain Points", &audience.pain_points);

    let plan = &strategy.content_plan;
    out.push_str("## Content Plan\n\n");
    push_list(&mut out, "### Content Types", &plan.types);
    push_list(&mut out, "### Topics", &plan.topics);
    push_list(&mut out, "### Best Practices", &plan.best_practices);
    for (i, brief) in plan.content_briefs.iter().enumerate() {
        let _ = writeln!(out, "### Brief {}: {}\n", i + 1, brief.topic);
        let _ = writeln!(out, "- Audience: {}", brief.target_audience);
        let _ = writeln!(out, "- Tone: {}", brief.tone);
        let _ = writeln!(out, "- Call to action: {}", brief.call_to_action);
        if !brief.target_keywords.is_empty() {
            let _ = writeln!(out, "- Keywords: {}", brief.target_keywords.join(", "));
        }
        out.push('\n');
        push_list(&mut out, "#### Outline", &brief.outline);
        push_list(&mut out, "#### Key Points", &brief.key_points);
    }

    let schedule = &strategy.posting_schedule;
    let _ = writeln!(
        out,
        "## Posting Schedule\n\n- Frequency: {}\n- Consistency: {}\n",
        schedule.frequency, schedule.consistency
    );
    push_list(&mut out, "### Best Times", &schedule.best_times);

    out.push_str("## Engagement\n\n");
    push_list(&mut out, "### Tactics", &strategy.engagement.tactics);
    push_list(&mut out, "### Responses", &strategy.engagement.responses);
    push_list(&mut out, "### Monitoring", &strategy.engagement.monitoring);

    out.push_str("## Metrics\n\n");
    push_list(&mut out, "### KPIs", &strategy.metrics.kpis);
    push_list(&mut out, "### Tools", &strategy.metrics.tools);
    push_list(&mut out, "### Goals", &strategy.metrics.goals);

    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}

fn push_list(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "{heading}\n");
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
    out.push('\n');
}
