use std::path::PathBuf;

use assert_fs::prelude::*;
use assert_fs::TempDir;

use searchpath::{MapEnv, MemoryFs, PathResolver, RealFs, Token};

fn real_resolver(dirs: &[PathBuf]) -> PathResolver<RealFs, MapEnv> {
    let mut r = PathResolver::with_backends(RealFs, MapEnv::new());
    r.set_directories(dirs.to_vec()).set_search_cwd_first(false);
    r
}

#[test]
fn photo_resolves_in_second_directory_via_suffix() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let d1 = tmp.child("d1");
    let d2 = tmp.child("d2");
    d1.create_dir_all()?;
    d2.create_dir_all()?;
    d2.child("photo.jpg").touch()?;

    let mut r = real_resolver(&[d1.path().to_path_buf(), d2.path().to_path_buf()]);
    r.set_suffixes([".png", ".jpg"]);

    assert_eq!(r.resolve("photo"), Some(d2.path().join("photo.jpg")));
    Ok(())
}

#[test]
fn qualified_name_ignores_suffixes() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let d1 = tmp.child("d1");
    let d2 = tmp.child("d2");
    d1.create_dir_all()?;
    d2.create_dir_all()?;
    d1.child("photo.png.jpg").touch()?;
    d2.child("photo.jpg").touch()?;

    let mut r = real_resolver(&[d1.path().to_path_buf(), d2.path().to_path_buf()]);
    r.set_suffixes([".png", ".jpg"]);

    assert_eq!(r.resolve("photo.png"), None);
    Ok(())
}

#[test]
fn suffixless_hit_in_later_directory_wins() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let d1 = tmp.child("d1");
    let d2 = tmp.child("d2");
    d1.create_dir_all()?;
    d2.create_dir_all()?;
    d1.child("photo.png").touch()?;
    d2.child("photo").touch()?;

    let mut r = real_resolver(&[d1.path().to_path_buf(), d2.path().to_path_buf()]);
    r.set_suffixes(".png").set_allow_suffixless(true);
    assert_eq!(r.resolve("photo"), Some(d2.path().join("photo")));

    r.set_allow_suffixless(false);
    assert_eq!(r.resolve("photo"), Some(d1.path().join("photo.png")));
    Ok(())
}

#[test]
fn find_lists_matching_names_in_directory_order() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let d1 = tmp.child("d1");
    let d2 = tmp.child("d2");
    d1.create_dir_all()?;
    d2.create_dir_all()?;
    d1.child("a.jpg").touch()?;
    d1.child(".hidden.jpg").touch()?;
    d1.child("b.png").touch()?;
    d2.child("c.jpg").touch()?;

    let mut r = real_resolver(&[d1.path().to_path_buf(), d2.path().to_path_buf()]);
    r.append_directories(tmp.path().join("missing"));

    let found = r.find_str(Some(r"\.jpg$"))?;
    assert_eq!(found, vec!["a.jpg", "c.jpg"]);
    Ok(())
}

#[test]
fn find_applies_pattern_and_configured_suffixes_together() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let content = tmp.child("content");
    content.create_dir_all()?;
    content.child("wall-a.png").touch()?;
    content.child("wall-b.jpg").touch()?;
    content.child("floor.png").touch()?;

    let mut r = real_resolver(&[content.path().to_path_buf()]);
    r.set_suffixes("png");

    let found = r.find_str(Some("^wall-"))?;
    assert_eq!(found, vec!["wall-a.png"]);
    Ok(())
}

#[test]
fn home_and_path_variables_expand() {
    let env = MapEnv::new().with("HOME", "/home/u").with("PATH", "/a:/b");

    let mut r = PathResolver::with_backends(MemoryFs::new(), env.clone());
    r.append_directories("~/x");
    assert_eq!(r.directories(), ["/home/u/x"]);

    let mut r = PathResolver::with_backends(MemoryFs::new(), env);
    r.append_directories("$PATH");
    assert_eq!(r.directories(), ["/a", "/b"]);
}

#[test]
fn colon_list_and_nested_list_build_the_same_state() {
    let mut joined = PathResolver::with_backends(MemoryFs::new(), MapEnv::new());
    joined.append_directories("a:b:c");

    let mut nested = PathResolver::with_backends(MemoryFs::new(), MapEnv::new());
    nested.append_directories(Token::List(vec![
        "a".into(),
        Token::List(vec!["b".into(), "a".into()]),
        "c".into(),
    ]));

    assert_eq!(joined.directories(), nested.directories());
}

#[test]
fn independent_resolvers_do_not_share_state() {
    let mut first = PathResolver::with_backends(MemoryFs::new(), MapEnv::new());
    let second = PathResolver::with_backends(MemoryFs::new(), MapEnv::new());
    first.append_directories("/only/here").append_suffixes("zip");

    assert_eq!(first.suffixes(), [".zip"]);
    assert!(second.directories().is_empty());
    assert!(second.suffixes().is_empty());
}
