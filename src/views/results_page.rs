use crate::models::vote_models::Tally;

use super::{capitalize, escape_html};

/// Client-side reload interval, seconds. The page polls; there is no push.
const REFRESH_SECONDS: u32 = 2;

/// Renders the results page: one bar per option scaled to the leading
/// option, an empty-state message when nothing has been cast, and a banner
/// after a bulk delete.
pub fn render_results_page(tally: &Tally, deleted: bool) -> String {
    let banner = if deleted {
        r#"<div class="banner">All votes deleted.</div>"#
    } else {
        ""
    };

    let body = if tally.total == 0 {
        r#"<p class="empty">No votes have been cast yet.</p>"#.to_string()
    } else {
        tally
            .entries
            .iter()
            .map(|entry| {
                format!(
                    r#"<div class="row">
      <span class="label">{label}</span>
      <div class="track"><div class="bar" style="width: {width}%"></div></div>
      <span class="count">{count} votes ({percentage}%)</span>
    </div>"#,
                    label = escape_html(&capitalize(&entry.option)),
                    width = entry.bar_width,
                    count = entry.count,
                    percentage = entry.percentage,
                )
            })
            .collect::<Vec<_>>()
            .join("\n    ")
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>Results</title>
  <meta http-equiv="refresh" content="{REFRESH_SECONDS}">
  <style>
    body {{ font-family: sans-serif; max-width: 640px; margin: 4em auto; }}
    .banner {{ background: #fff3cd; padding: 0.75em; margin-bottom: 1em; border-radius: 4px; }}
    .row {{ display: flex; align-items: center; gap: 1em; margin: 0.5em 0; }}
    .label {{ width: 6em; }}
    .track {{ flex: 1; background: #eee; border-radius: 4px; }}
    .bar {{ background: #4a90d9; height: 1.5em; border-radius: 4px; }}
    .empty {{ color: #666; }}
    .total {{ margin-top: 1.5em; color: #333; }}
  </style>
</head>
<body>
  <h1>Results</h1>
  {banner}
  <div class="results">
    {body}
  </div>
  <p class="total">{total} votes total</p>
  <form method="post" action="/delete-all" onsubmit="return confirm('Delete all votes?')">
    <button type="submit">Delete all votes</button>
  </form>
</body>
</html>
"#,
        total = tally.total,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vote_models::OptionCount;

    fn tally(counts: Vec<(&str, i64)>) -> Tally {
        Tally::from_counts(
            counts
                .into_iter()
                .map(|(option, count)| OptionCount {
                    option: option.to_string(),
                    count,
                })
                .collect(),
        )
    }

    #[test]
    fn shows_counts_percentages_and_bars() {
        let page = render_results_page(&tally(vec![("cats", 2), ("dogs", 1)]), false);
        assert!(page.contains("Cats"));
        assert!(page.contains("2 votes (66.67%)"));
        assert!(page.contains("1 votes (33.33%)"));
        assert!(page.contains("width: 100%"));
        assert!(page.contains("width: 50%"));
        assert!(page.contains("3 votes total"));
    }

    #[test]
    fn empty_store_renders_empty_state() {
        let page = render_results_page(&tally(vec![]), false);
        assert!(page.contains("No votes have been cast yet."));
        assert!(page.contains("0 votes total"));
        assert!(!page.contains("class=\"row\""));
    }

    #[test]
    fn deletion_banner_only_when_flagged() {
        assert!(!render_results_page(&tally(vec![]), false).contains("All votes deleted."));
        assert!(render_results_page(&tally(vec![]), true).contains("All votes deleted."));
    }

    #[test]
    fn page_polls_on_a_fixed_interval() {
        let page = render_results_page(&tally(vec![]), false);
        assert!(page.contains(r#"http-equiv="refresh" content="2""#));
    }
}
