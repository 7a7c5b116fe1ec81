use super::*;

#[test]
fn separators_and_empty_tokens() {
    let entries = parse_title_list("NSME, NMKE,,NZLE\nNF3E\0 ").unwrap();
    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["NSME", "NMKE", "NZLE", "NF3E"]);
    assert_eq!(entries[0].image, ImageHandle(0));
    assert_eq!(entries[3].image, ImageHandle(3));
}

#[test]
fn blank_text_is_an_empty_catalog() {
    assert!(parse_title_list("").unwrap().is_empty());
    assert!(parse_title_list(" ,\n").unwrap().is_empty());
}

#[test]
fn overlong_id_is_rejected() {
    let err = parse_title_list("NSME,ABCDEFGH").unwrap_err();
    assert!(matches!(err, TitleGridError::Catalog(_)));
    assert!(err.to_string().contains("ABCDEFGH"));
}

#[test]
fn missing_file_yields_zero_items() {
    let mut src = TitleListFile::new("target/does-not-exist/title.csv");
    assert!(src.load().unwrap().is_empty());
}

#[test]
fn file_source_parses_contents() {
    let dir = std::path::PathBuf::from("target").join("catalog_source");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("title.csv");
    std::fs::write(&path, "NSME,NMKE").unwrap();

    let mut src = TitleListFile::new(&path);
    let entries = src.load().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].id, "NMKE");
}

#[test]
fn numbered_catalog_ids_are_sequential() {
    let mut src = StaticCatalog::numbered(3);
    let entries = src.load().unwrap();
    assert_eq!(entries[2].id, "T002");
    assert_eq!(entries[2].image, ImageHandle(2));
}
