//! Switching between regions on game configs in different encodings.

use encoding_rs::{BIG5, GBK};
use pretty_assertions::assert_eq;
use sea_core::{AppLayout, ApplyOptions, Preferences, apply_region};
use sea_test_utils::TestHome;
use sea_test_utils::fixtures::{OLD_BLOCK, game_document};

const EAST: &str = r#"<WorldmapBookMark id="east"><Point x="10" y="20"/></WorldmapBookMark>"#;
const SOUTH: &str = r#"<WorldmapBookMark id="south"><Point x="30" y="40"/><Point x="50" y="60"/></WorldmapBookMark>"#;

fn setup(target: &[u8]) -> (TestHome, AppLayout, Preferences) {
    let home = TestHome::new();
    home.add_region("east", format!("<?xml version=\"1.0\"?>\n<Region>{}</Region>", EAST));
    home.add_region("south", format!("<?xml version=\"1.0\"?>\n<Region>{}</Region>", SOUTH));
    home.write_target(target);
    home.write_preferences();
    let layout = AppLayout::new(home.root());
    let prefs = Preferences::load(&layout).unwrap();
    (home, layout, prefs)
}

#[test]
fn test_switching_back_and_forth() {
    let (home, layout, prefs) = setup(game_document(OLD_BLOCK).as_bytes());

    for name in ["east", "south", "east"] {
        apply_region(&layout, &prefs, name, ApplyOptions::default()).unwrap();
    }

    assert_eq!(
        String::from_utf8(home.read_target()).unwrap(),
        game_document(EAST)
    );
    assert_eq!(
        String::from_utf8(home.read_backup()).unwrap(),
        game_document(SOUTH)
    );
}

#[test]
fn test_lowercase_target_tag_is_replaced() {
    let (home, layout, prefs) =
        setup(b"<?xml version=\"1.0\"?>\n<game><worldmapbookmark><old/></worldmapbookmark></game>");

    apply_region(&layout, &prefs, "south", ApplyOptions::default()).unwrap();

    assert_eq!(
        String::from_utf8(home.read_target()).unwrap(),
        format!("<?xml version=\"1.0\"?>\n<game>{}</game>", SOUTH)
    );
}

fn chinese_game(encoding: &str, block: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"{encoding}\"?>\n<GameVariable>\n  <!-- 這是遊戲的世界地圖書籤設定檔案，請不要手動修改其中的內容，否則可能導致存檔損壞 -->\n  {block}\n</GameVariable>\n"
    )
}

#[test]
fn test_big5_target_keeps_its_bytes() {
    let original = chinese_game("big5", OLD_BLOCK);
    let (bytes, _, _) = BIG5.encode(&original);
    let (home, layout, prefs) = setup(&bytes);

    apply_region(&layout, &prefs, "east", ApplyOptions::default()).unwrap();

    let updated = chinese_game("big5", EAST);
    let (expected, _, _) = BIG5.encode(&updated);
    assert_eq!(home.read_target(), expected.into_owned());
    assert_eq!(home.read_backup(), bytes.into_owned());
}

#[test]
fn test_gbk_target_keeps_its_bytes() {
    let original = chinese_game("gbk", OLD_BLOCK).replace("這是遊戲的世界地圖書籤設定檔案", "这是游戏的世界地图书签配置文件");
    let (bytes, _, _) = GBK.encode(&original);
    let (home, layout, prefs) = setup(&bytes);

    apply_region(&layout, &prefs, "east", ApplyOptions::default()).unwrap();

    let updated = original.replace(OLD_BLOCK, EAST);
    let (expected, _, _) = GBK.encode(&updated);
    assert_eq!(home.read_target(), expected.into_owned());
}
