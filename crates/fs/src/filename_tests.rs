use super::*;

#[test]
fn split_extension_cases() {
    let cases: &[(&str, (&str, &str))] = &[
        ("photo.JPG", ("photo", ".JPG")),
        ("README", ("README", "")),
        ("archive.tar.gz", ("archive.tar", ".gz")),
        (".bashrc", (".bashrc", "")),
        ("..hidden", ("..hidden", "")),
        ("...", ("...", "")),
        ("..hidden.txt", ("..hidden", ".txt")),
        ("trailing.", ("trailing", ".")),
        ("2020-01-15 party.mov", ("2020-01-15 party", ".mov")),
        ("", ("", "")),
    ];

    for (name, expected) in cases {
        assert_eq!(
            split_extension(name),
            *expected,
            "split_extension({:?})",
            name
        );
    }
}

#[test]
fn analyze_photo_with_uppercase_extension() {
    let info = FilenameInfo::analyze("photo.JPG");

    assert_eq!(info.stem(), "photo");
    assert_eq!(info.extension(), ".JPG");
    let mime = info.mime_type().expect("mime for .JPG");
    assert!(mime.starts_with("image/"), "got {mime}");
}

#[test]
fn analyze_without_extension_has_no_mime() {
    let info = FilenameInfo::analyze("README");

    assert_eq!(info.stem(), "README");
    assert_eq!(info.extension(), "");
    assert_eq!(info.mime_type(), None);
}

#[test]
fn analyze_unknown_extension_is_not_an_error() {
    let info = FilenameInfo::analyze("notes.zzz");
    assert_eq!(info.extension(), ".zzz");
    assert_eq!(info.mime_type(), None);
}

#[test]
fn analyze_keeps_basename_and_reconstructs_it() {
    let names = [
        "a.b.c",
        "clip.mp4",
        "no_ext",
        ".dotfile",
        "",
        "trailing.",
        "ünïcødé.png",
        "IMG_20200115_143022.heic",
    ];

    for name in names {
        let info = FilenameInfo::analyze(name);
        assert_eq!(info.basename(), name);
        assert_eq!(
            format!("{}{}", info.stem(), info.extension()),
            name,
            "stem + extension should rebuild {:?}",
            name
        );
    }
}

#[test]
fn set_basename_rederives_all_fields() {
    let mut info = FilenameInfo::analyze("song.mp3");
    assert_eq!(info.mime_type(), Some("audio/mpeg"));

    info.set_basename("movie.mkv");

    assert_eq!(info, FilenameInfo::analyze("movie.mkv"));
    assert_eq!(info.stem(), "movie");
    assert_eq!(info.extension(), ".mkv");
    assert_eq!(info.mime_type(), Some("video/x-matroska"));
}
