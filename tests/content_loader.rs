use std::fs;
use std::path::Path;

use folio::io::ContentLoader;
use folio::model::period::{CalendarMonth, Period};
use folio::model::{Category, ImagePosition};

fn write(root: &Path, rel: &str, text: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

fn month(y: i32, m: u32) -> CalendarMonth {
    CalendarMonth::new(y, m).unwrap()
}

#[test]
fn missing_directory_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loader = ContentLoader::new(dir.path().join("nope"));
    let portfolio = loader.load_all();

    assert!(portfolio.is_empty());
    assert_eq!(portfolio.settings.site_title, "My Portfolio");
    assert_eq!(portfolio.resume.description, "Resume not found");
    assert_eq!(portfolio.resume.pdf_url, "/resume/resume.pdf");
}

#[test]
fn records_fill_defaults_and_sort_by_order() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "hobbies/b-climbing.md", "---\ntitle: Climbing\norder: 1\n---\nBouldering mostly.\n");
    write(dir.path(), "hobbies/a-photo.md", "---\ntitle: Photography\norder: \"2\"\nimage: /photos/cam.jpg\n---\n");
    write(dir.path(), "hobbies/c-chess.md", "---\ntitle: Chess\norder: 1\nadditionalImages:\n  - /a.jpg\n  - /b.jpg\n---\n");
    write(dir.path(), "hobbies/notes.txt", "not content");

    let hobbies = ContentLoader::new(dir.path()).hobbies();
    let ids: Vec<&str> = hobbies.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, ["b-climbing", "c-chess", "a-photo"]);

    assert_eq!(hobbies[0].description, "Bouldering mostly.");
    assert_eq!(hobbies[0].image, "/photos/placeholder.jpg");
    assert_eq!(hobbies[1].additional_images, ["/a.jpg", "/b.jpg"]);
    assert_eq!(hobbies[2].image, "/photos/cam.jpg");
    assert_eq!(hobbies[2].order, 2);
}

#[test]
fn unterminated_header_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "professional/good.md", "---\ntitle: Engineer\n---\n");
    write(dir.path(), "professional/broken.md", "---\ntitle: Never closed\n");

    let records = ContentLoader::new(dir.path()).professional();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Engineer");
}

#[test]
fn timeline_entries_are_normalised() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "timeline/job.md",
        "---\ntitle: Developer\ncompany_or_school: Acme\nstart_date: 2021-03\nend_date: Present\ncategory: work\ncolor: \"#ff8800\"\n---\nBuilt things.\n",
    );
    write(
        dir.path(),
        "timeline/degree.md",
        "---\ntitle: BSc\norganization: University\ndate: 2015-09\nend_date: 2019-06\ncategory: education\n---\n",
    );
    write(
        dir.path(),
        "timeline/backwards.md",
        "---\ntitle: Typo\nstart_date: 2020-05\nend_date: 2019-01\n---\n",
    );
    write(
        dir.path(),
        "timeline/garbled-end.md",
        "---\ntitle: Garbled\nstart_date: 2018-01\nend_date: someday\n---\n",
    );
    write(dir.path(), "timeline/undated.md", "---\ntitle: Undated\nstart_date: soon\n---\n");

    let entries = ContentLoader::new(dir.path()).timeline();
    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["job", "backwards", "garbled-end", "degree"]);

    let job = &entries[0];
    assert_eq!(job.start, month(2021, 3));
    assert_eq!(job.end, Period::Open);
    assert_eq!(job.organization.as_deref(), Some("Acme"));
    assert_eq!(job.category, Category::Work);
    assert!(job.color.is_some());
    assert_eq!(job.description, "Built things.");

    assert_eq!(entries[1].end, Period::At(month(2020, 5)));
    assert_eq!(entries[2].end, Period::Open);

    let degree = &entries[3];
    assert_eq!(degree.category, Category::Education);
    assert_eq!(degree.start, month(2015, 9));
    assert_eq!(degree.end, Period::At(month(2019, 6)));
    assert_eq!(degree.organization.as_deref(), Some("University"));
}

#[test]
fn story_prefers_content_field_and_renders_html() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "personal/story/02-later.md",
        "---\norder: 2\nimage: /photos/me.jpg\nimagePosition: right\ncontent: \"**Moved** north.\"\n---\nIgnored body.\n",
    );
    write(dir.path(), "personal/story/01-early.md", "---\norder: 1\n---\nGrew up by the sea.\n");
    write(dir.path(), "personal/funfacts/coffee.md", "---\ntext: Five cups a day\n---\n");

    let loader = ContentLoader::new(dir.path());
    let story = loader.story();
    assert_eq!(story.len(), 2);
    assert_eq!(story[0].id, "01-early");
    assert_eq!(story[0].markdown, "Grew up by the sea.");
    assert_eq!(story[0].image_position, ImagePosition::Left);

    assert_eq!(story[1].markdown, "**Moved** north.");
    assert!(story[1].html.contains("<strong>Moved</strong>"));
    assert_eq!(story[1].image_position, ImagePosition::Right);

    let facts = loader.fun_facts();
    assert_eq!(facts.len(), 1);
    assert_eq!(facts[0].emoji, "✨");
    assert_eq!(facts[0].text, "Five cups a day");
}

#[test]
fn settings_and_resume() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "settings.json",
        r#"{"siteTitle":"Jane's Desk","projects":{"googleSlidesEmbedUrl":"https://docs.google.com/x"}}"#,
    );
    write(dir.path(), "resume/resume.md", "---\npdfUrl: /files/cv.pdf\n---\nTen years of Rust.\n");

    let loader = ContentLoader::new(dir.path());
    let settings = loader.settings();
    assert_eq!(settings.site_title, "Jane's Desk");
    assert_eq!(settings.author_name, "Your Name");
    assert_eq!(
        settings.projects.map(|p| p.slides_url).as_deref(),
        Some("https://docs.google.com/x")
    );

    let resume = loader.resume();
    assert_eq!(resume.pdf_url, "/files/cv.pdf");
    assert_eq!(resume.description, "Ten years of Rust.");
}

#[test]
fn malformed_settings_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "settings.json", "{ not json");
    assert_eq!(ContentLoader::new(dir.path()).settings().site_title, "My Portfolio");
}
