use crate::state::VoteOptions;

use super::{capitalize, escape_html};

/// Renders the voting form: one submit button per configured option, plus a
/// banner after a successful submission.
pub fn render_vote_page(options: &VoteOptions, success: bool) -> String {
    let banner = if success {
        r#"<div class="banner">Your vote was recorded.</div>"#
    } else {
        ""
    };

    let buttons: String = options
        .pair()
        .iter()
        .map(|option| {
            format!(
                r#"<button type="submit" name="option" value="{value}">{label}</button>"#,
                value = escape_html(option),
                label = escape_html(&capitalize(option)),
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>Cast your vote</title>
  <style>
    body {{ font-family: sans-serif; max-width: 480px; margin: 4em auto; }}
    .banner {{ background: #d4edda; padding: 0.75em; margin-bottom: 1em; border-radius: 4px; }}
    button {{ display: block; width: 100%; padding: 1em; margin: 0.5em 0; font-size: 1.2em; cursor: pointer; }}
  </style>
</head>
<body>
  <h1>Cast your vote</h1>
  {banner}
  <form method="post" action="/vote">
    {buttons}
  </form>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> VoteOptions {
        VoteOptions::new("cats".to_string(), "dogs".to_string())
    }

    #[test]
    fn lists_both_options_with_capitalized_labels() {
        let page = render_vote_page(&options(), false);
        assert!(page.contains(r#"value="cats">Cats</button>"#));
        assert!(page.contains(r#"value="dogs">Dogs</button>"#));
        assert!(page.contains(r#"action="/vote""#));
    }

    #[test]
    fn banner_only_after_success() {
        assert!(!render_vote_page(&options(), false).contains("Your vote was recorded"));
        assert!(render_vote_page(&options(), true).contains("Your vote was recorded"));
    }

    #[test]
    fn option_values_are_escaped() {
        let odd = VoteOptions::new("<cats>".to_string(), "dogs".to_string());
        let page = render_vote_page(&odd, false);
        assert!(!page.contains("value=\"<cats>\""));
        assert!(page.contains("&lt;cats&gt;"));
    }
}
