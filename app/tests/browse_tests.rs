use app::catalog::{Filter, Listing, PAGE_SIZE, filter_items, page_numbers, paginate};
use app::fetch_guard::{FetchGeneration, Relevant};
use app::lightbox::{Lightbox, LightboxKey};
use app::portfolio::{PORTFOLIO_ROUTE, current_listing};
use app::portfolio_item::{DetailState, caption};
use app::query::BrowseQuery;
use app::types::PortfolioItem;
use assert_matches::assert_matches;

fn item(id: &str, title: &str, sub: &str, created_at: &str) -> PortfolioItem {
    PortfolioItem {
        id: id.to_owned(),
        title: title.to_owned(),
        main_category: "branding".to_owned(),
        sub_category: sub.to_owned(),
        created_at: created_at.to_owned(),
        files: vec![format!("https://cdn.example.com/{id}.png")],
        ..Default::default()
    }
}

fn collection(count: usize) -> Vec<PortfolioItem> {
    (0..count)
        .map(|n| {
            let sub = if n % 2 == 0 { "logo" } else { "banner" };
            item(&format!("i{n:02}"), &format!("Work {n}"), sub, &format!("2024-01-{:02}", n + 1))
        })
        .collect()
}

#[test]
fn test_url_query_drives_listing() {
    let items = collection(30);
    let query = BrowseQuery::from_params(Some("logo".into()), Some("2".into()));
    let filter = Filter::new(query.sub_category.clone(), "");

    let listing = Listing::from_items(&items, &filter, query.page, PAGE_SIZE);
    assert_matches!(listing, Listing::Page(slice) => {
        assert_eq!(slice.total, 15);
        assert_eq!(slice.page_count, 2);
        assert_eq!(slice.page, 2);
        assert_eq!(slice.items.len(), 3);
        assert!(slice.items.iter().all(|i| i.sub_category == "logo"));
    });
}

#[test]
fn test_search_resets_to_first_page() {
    let fetched = Ok(collection(30));
    let query = BrowseQuery::from_params(Some("logo".into()), Some("2".into()));

    let reset = query.after_search().unwrap();
    assert_eq!(reset.to_href(PORTFOLIO_ROUTE), "/portfolio?subCategory=logo");
    assert_eq!(reset.after_search(), None);

    // "Work 2" and "Work 20".."Work 28" are the even, logo-tagged matches.
    let listing = current_listing(&fetched, &reset, "work 2");
    assert_matches!(listing, Listing::Page(ref slice) if slice.page == 1 && slice.total == 6);
}

#[test]
fn test_newest_first_across_pages() {
    let items = collection(25);
    let ordered = filter_items(&items, &Filter::default());
    let first = paginate(&ordered, 1, PAGE_SIZE);
    let last = paginate(&ordered, 3, PAGE_SIZE);

    assert_eq!(first.items.first().map(|i| i.id.as_str()), Some("i24"));
    assert_eq!(last.items.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(), vec!["i00"]);
    assert_eq!(page_numbers(first.page_count).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn test_filter_outcomes_are_distinct() {
    let failed: Result<Vec<PortfolioItem>, String> = Err("timeout".into());
    assert_eq!(Listing::from_fetch(&failed, &Filter::default(), 1, PAGE_SIZE), Listing::Failed);
    assert_eq!(Listing::from_items(&[], &Filter::default(), 1, PAGE_SIZE), Listing::Empty);
    assert_eq!(
        Listing::from_items(&collection(3), &Filter::new(Some("poster".into()), ""), 1, PAGE_SIZE),
        Listing::NoMatches
    );
}

#[test]
fn test_detail_flow_with_lightbox() {
    let mut record = item("a", "Logo Pack", "logo", "2024-01-01");
    record.files = vec!["1.png".into(), "2.png".into(), "3.png".into()];

    let generation = FetchGeneration::new();
    let stale = generation.begin();
    let ticket = generation.begin();
    assert_eq!(stale.settle(DetailState::NotFound), Relevant::Stale);

    let state = ticket.settle(DetailState::from_fetch::<()>(Ok(Some(record)))).into_current();
    let Some(DetailState::Ready(record)) = state else {
        panic!("expected a ready item");
    };

    let mut lightbox = Lightbox::new(record.files.len());
    lightbox.open(0);
    lightbox.apply_key(LightboxKey::Previous);
    assert_eq!(caption(&lightbox, &record.title).as_deref(), Some("3 / 3 - Logo Pack"));
    assert_eq!(lightbox.adjacent(), Some((0, 1)));

    lightbox.apply_key(LightboxKey::Close);
    assert!(!lightbox.is_open());
}
