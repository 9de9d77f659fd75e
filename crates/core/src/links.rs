//! Link cards and follower totals

use creatorhub_domain::{FollowerCounts, LinkConfig};

/// Active links in display order. Equal `order` values keep config order.
pub fn visible_links(links: &[LinkConfig]) -> Vec<&LinkConfig> {
    let mut visible: Vec<&LinkConfig> = links.iter().filter(|l| l.active).collect();
    visible.sort_by_key(|l| l.order);
    visible
}

/// Sum of every known follower count, shown in the home page hero.
pub fn total_followers(counts: &FollowerCounts) -> u64 {
    counts.values().copied().sum()
}

/// Follower count shown on a link card, if the card shows one and the count
/// is known.
pub fn link_follower_count(link: &LinkConfig, counts: &FollowerCounts) -> Option<u64> {
    if !(link.is_social && link.show_subscriber_count) {
        return None;
    }
    link.platform_id.as_deref().and_then(|id| counts.get(id).copied())
}

/// Total over active social links that display a count.
///
/// `None` while any of those links has no count yet; the page then shows the
/// loading label instead of a partial sum.
pub fn linked_follower_total(links: &[LinkConfig], counts: &FollowerCounts) -> Option<u64> {
    links
        .iter()
        .filter(|l| l.counts_followers())
        .map(|l| link_follower_count(l, counts))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(label: &str, order: i32, platform: Option<&str>) -> LinkConfig {
        LinkConfig {
            label_key: label.to_string(),
            url: format!("https://example.com/{label}"),
            order,
            is_social: platform.is_some(),
            show_subscriber_count: platform.is_some(),
            platform_id: platform.map(str::to_string),
            ..LinkConfig::default()
        }
    }

    fn counts(entries: &[(&str, u64)]) -> FollowerCounts {
        entries.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
    }

    #[test]
    fn visible_links_are_sorted_and_filtered() {
        let mut hidden = link("hidden", 0, None);
        hidden.active = false;
        let links = vec![link("c", 3, None), hidden, link("a", 1, None), link("b", 1, None)];

        let labels: Vec<&str> = visible_links(&links).iter().map(|l| l.label_key.as_str()).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn total_followers_sums_everything() {
        assert_eq!(total_followers(&counts(&[("youtube", 1200), ("vk_group", 300)])), 1500);
        assert_eq!(total_followers(&FollowerCounts::new()), 0);
    }

    #[test]
    fn linked_total_requires_every_count() {
        let links = vec![link("yt", 1, Some("youtube")), link("tg", 2, Some("telegram"))];

        assert_eq!(linked_follower_total(&links, &counts(&[("youtube", 10), ("telegram", 5)])), Some(15));
        assert_eq!(linked_follower_total(&links, &counts(&[("youtube", 10)])), None);
    }

    #[test]
    fn linked_total_ignores_links_without_counts() {
        let mut quiet = link("ig", 3, Some("instagram"));
        quiet.show_subscriber_count = false;
        let mut inactive = link("x", 4, Some("x"));
        inactive.active = false;
        let links = vec![link("yt", 1, Some("youtube")), quiet, inactive, link("site", 5, None)];

        assert_eq!(linked_follower_total(&links, &counts(&[("youtube", 7), ("instagram", 100)])), Some(7));
        assert_eq!(linked_follower_total(&[], &FollowerCounts::new()), Some(0));
    }
}
