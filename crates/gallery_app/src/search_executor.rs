//! Deferred filter pass driven by the live query.

use std::time::Duration;

use gallery_state::SearchTicket;
use leptos::*;

use crate::runtime_context::GalleryContext;

/// Installs the effect that re-filters the catalog whenever the query changes.
///
/// Each change issues a new ticket and schedules the pass on a zero-delay timer, so typing never
/// waits on filtering. Only the newest ticket's results reach the grid.
pub fn install(gallery: GalleryContext) {
    create_effect(move |_| {
        let query = gallery.state.with(|state| state.query().to_string());
        let already_shown = gallery
            .results
            .with_untracked(|results| !results.lags(&query));
        let Some(ticket) = gallery
            .scheduler
            .try_update_value(|scheduler| scheduler.issue(query))
        else {
            return;
        };
        if already_shown {
            gallery.scheduler.update_value(|scheduler| {
                scheduler.accept(&ticket);
            });
            return;
        }
        set_timeout(move || run_pass(gallery, ticket), Duration::ZERO);
    });
}

/// Filters for `ticket` and publishes the results unless a newer ticket was issued meanwhile.
pub(crate) fn run_pass(gallery: GalleryContext, ticket: SearchTicket) {
    let current = gallery
        .scheduler
        .try_with_value(|scheduler| scheduler.is_current(&ticket))
        .unwrap_or(false);
    if !current {
        return;
    }

    let names = gallery.catalog.filter_names(ticket.query());
    let completed = gallery
        .scheduler
        .try_update_value(|scheduler| scheduler.complete(ticket, names))
        .flatten();
    if let Some(results) = completed {
        gallery.results.set(results);
    }
}

#[cfg(test)]
mod tests {
    use gallery_state::{DeferredResults, ViewField};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::runtime_context::tests::gallery_at;

    fn shown(gallery: GalleryContext) -> (String, Vec<String>) {
        gallery
            .results
            .with_untracked(|results| (results.query().to_string(), results.items().to_vec()))
    }

    #[test]
    fn superseded_pass_leaves_results_untouched() {
        let _ = create_runtime();
        let (gallery, _store) = gallery_at("http://localhost/");
        let before = shown(gallery);

        let stale = gallery
            .scheduler
            .try_update_value(|s| s.issue("ho"))
            .expect("issue");
        let live = gallery
            .scheduler
            .try_update_value(|s| s.issue("home"))
            .expect("issue");

        run_pass(gallery, stale);
        assert_eq!(shown(gallery), before);

        run_pass(gallery, live);
        assert_eq!(shown(gallery), ("home".to_string(), vec!["home".to_string()]));
        assert!(!gallery.scheduler.with_value(|s| s.is_pending()));
    }

    #[test]
    fn query_already_on_screen_is_accepted_without_a_pass() {
        let _ = create_runtime();
        let (gallery, _store) = gallery_at("http://localhost/");
        install(gallery);
        assert!(!gallery.scheduler.with_value(|s| s.is_pending()));

        gallery
            .results
            .set(DeferredResults::new("nav", vec!["home".to_string()]));
        gallery.set_field(ViewField::Query, "nav");

        assert!(!gallery.scheduler.with_value(|s| s.is_pending()));
        assert!(!gallery.results_pending());
        assert_eq!(shown(gallery), ("nav".to_string(), vec!["home".to_string()]));

        let next = gallery
            .scheduler
            .try_update_value(|s| s.issue("menu"))
            .expect("issue");
        assert_eq!(next.seq(), 3, "effect issues one ticket per query change");
    }
}
