use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use noticeboard::{
    config::RenderConfig,
    data_source::{DataSource, FileDataSource},
    domain::{AnnouncementFeed, AnnouncementItem, FeedSection, FeedSelection, SortMode},
    error::{AppError, Result},
    render::{HtmlListRenderer, Renderer},
    view_model::PageInfo,
    ListController, ListViewModel, LoadOutcome,
};

#[derive(Default)]
struct RecordingRenderer {
    calls: Vec<(Vec<String>, PageInfo)>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, items: &[AnnouncementItem], page: &PageInfo) {
        let titles = items.iter().map(|i| i.title().to_string()).collect();
        self.calls.push((titles, *page));
    }
}

struct StaticSource {
    feed: AnnouncementFeed,
    loads: Arc<Mutex<usize>>,
}

#[async_trait]
impl DataSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn load(&self) -> Result<AnnouncementFeed> {
        *self.loads.lock().unwrap() += 1;
        Ok(self.feed.clone())
    }
}

struct FailingSource;

#[async_trait]
impl DataSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn load(&self) -> Result<AnnouncementFeed> {
        Err(AppError::Network("connection refused".to_string()))
    }
}

fn numbered(prefix: &str, n: usize) -> Vec<AnnouncementItem> {
    (1..=n).map(|i| AnnouncementItem::new(format!("{} {}", prefix, i))).collect()
}

fn controller() -> ListController<RecordingRenderer> {
    ListController::new(ListViewModel::new(), RecordingRenderer::default())
}

#[tokio::test]
async fn test_load_renders_first_page() -> anyhow::Result<()> {
    let loads = Arc::new(Mutex::new(0));
    let source = StaticSource {
        feed: AnnouncementFeed {
            upcoming_deadlines_events: numbered("Event", 12),
            milestones: numbered("Milestone", 2),
            ..Default::default()
        },
        loads: loads.clone(),
    };

    let mut controller = controller();
    let outcome = controller
        .load(&source, &FeedSelection::section(FeedSection::Upcoming))
        .await?;

    assert_eq!(outcome, LoadOutcome::Applied { items: 12 });
    assert_eq!(*loads.lock().unwrap(), 1);

    let calls = &controller.renderer().calls;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0.len(), 10);
    assert_eq!(calls[0].1.page_count, 2);
    assert_eq!(calls[0].1.current_page, 1);
    Ok(())
}

#[tokio::test]
async fn test_every_transition_renders_without_refetching() -> anyhow::Result<()> {
    let loads = Arc::new(Mutex::new(0));
    let source = StaticSource {
        feed: AnnouncementFeed {
            important_announcements: numbered("Notice", 25),
            ..Default::default()
        },
        loads: loads.clone(),
    };

    let mut controller = controller();
    controller.load(&source, &FeedSelection::all()).await?;
    controller.go_to_page(3);
    controller.set_search_query("notice 2");
    controller.set_sort_mode(SortMode::Nearest);
    controller.set_sort_mode(SortMode::Default);
    controller.next_page();

    assert_eq!(*loads.lock().unwrap(), 1);

    let calls = &controller.renderer().calls;
    assert_eq!(calls.len(), 6);

    let (page_three, info) = &calls[1];
    assert_eq!(page_three.len(), 5);
    assert_eq!(info.window_start, 1);
    assert_eq!(info.window_end, 3);
    assert!(!info.has_next());

    // "Notice 2" and "Notice 20".."Notice 25"
    let (searched, info) = &calls[2];
    assert_eq!(searched.len(), 7);
    assert_eq!(searched[0], "Notice 2");
    assert_eq!(info.page_count, 1);

    let (sorted, _) = &calls[3];
    assert_eq!(sorted, searched);

    let (restored, info) = &calls[4];
    assert_eq!(restored[0], "Notice 1");
    assert_eq!(info.total_items, 25);

    let (after_next, info) = &calls[5];
    assert_eq!(after_next.len(), 10);
    assert_eq!(after_next[0], "Notice 11");
    assert_eq!(info.current_page, 2);
    Ok(())
}

#[test]
fn test_arrows_without_affordance_do_not_render() {
    let mut controller = controller();
    let ticket = controller.begin_load();
    controller.finish_load(ticket, Ok(numbered("Item", 3))).unwrap();

    controller.previous_page();
    controller.next_page();
    assert_eq!(controller.renderer().calls.len(), 1);
}

#[test]
fn test_stale_load_is_discarded() {
    let mut controller = controller();

    let slow = controller.begin_load();
    let fresh = controller.begin_load();
    assert!(fresh.generation() > slow.generation());

    let outcome = controller.finish_load(fresh, Ok(numbered("Fresh", 2))).unwrap();
    assert_eq!(outcome, LoadOutcome::Applied { items: 2 });

    let outcome = controller.finish_load(slow, Ok(numbered("Stale", 5))).unwrap();
    assert_eq!(outcome, LoadOutcome::Stale);

    assert_eq!(controller.view_model().all_items().len(), 2);
    assert_eq!(controller.view_model().all_items()[0].title(), "Fresh 1");
    assert_eq!(controller.renderer().calls.len(), 1);
}

#[tokio::test]
async fn test_failed_load_keeps_previous_items() {
    let mut controller = controller();
    let ticket = controller.begin_load();
    controller.finish_load(ticket, Ok(numbered("Kept", 4))).unwrap();

    let err = controller
        .load(&FailingSource, &FeedSelection::all())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Network(_)));

    assert_eq!(controller.view_model().all_items().len(), 4);
    assert_eq!(controller.renderer().calls.len(), 1);
}

#[tokio::test]
async fn test_file_source_feeds_html_renderer() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join(format!("noticeboard-feed-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{
            "important_announcements": [
                {"title": "Library closed", "date": "June 1", "sorting_date": "06/01/2024", "guest_mode": true},
                {"title": "Staff only", "sorting_date": "2024-05-01", "guest_mode": false}
            ],
            "upcoming_deadlines_events": [
                {"title": "Enrollment", "date": "May 20", "sorting_date": "2024-05-20", "guest_mode": true,
                 "link": "https://school.example/enroll", "likes": {"amount": 2, "accounts": []}}
            ],
            "milestones": []
        }"#,
    )?;

    let source = FileDataSource::new(&path);
    let renderer = HtmlListRenderer::new(RenderConfig::default());
    let mut controller = ListController::new(ListViewModel::new(), renderer);

    let outcome = controller
        .load(&source, &FeedSelection::all().guests_only())
        .await?;
    assert_eq!(outcome, LoadOutcome::Applied { items: 2 });

    controller.set_sort_mode(SortMode::Nearest);
    let html = controller.renderer().output();
    let enrollment = html.find("Enrollment").expect("enrollment card");
    let library = html.find("Library closed").expect("library card");
    assert!(enrollment < library);
    assert!(!html.contains("Staff only"));
    assert!(html.contains(r#"<button class="pagination-button active" data-page="1">1</button>"#));
    assert_eq!(controller.renderer().render_count(), 2);

    std::fs::remove_file(&path)?;
    Ok(())
}

#[tokio::test]
async fn test_file_source_errors() {
    let missing = FileDataSource::new("/nonexistent/noticeboard/data.json");
    assert!(matches!(missing.load().await, Err(AppError::Io(_))));

    let path = std::env::temp_dir().join(format!("noticeboard-bad-{}.json", std::process::id()));
    std::fs::write(&path, "{ not json").unwrap();
    let broken = FileDataSource::new(&path);
    assert!(matches!(broken.load().await, Err(AppError::Parse(_))));
    std::fs::remove_file(&path).unwrap();
}
