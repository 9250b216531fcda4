use std::fs;
use std::path::{Path, PathBuf};

use corpuskit::error::Error;
use corpuskit::io::GroupIndex;
use corpuskit::processing::{
    annotations, countries, entities, recommend, sample, split, strip, template, topics,
};

/// Read every file under `dir` (recursively), sorted by relative path.
fn snapshot(dir: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    let mut entries = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(d) = stack.pop() {
        for entry in fs::read_dir(&d).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                let rel = path.strip_prefix(dir).unwrap().to_path_buf();
                entries.push((rel, fs::read(&path).unwrap()));
            }
        }
    }
    entries.sort();
    entries
}

/// Writes a small corpus of five documents, `0.txt` to `4.txt`.
fn corpus(dir: &Path) {
    let contents = [
        "Ada Lovelace _person wrote notes",
        "the weather in _location Paris",
        "nothing to see",
        "_organization ACME and Ada",
        "plain text again",
    ];
    for (i, c) in contents.iter().enumerate() {
        fs::write(dir.join(format!("{}.txt", i)), c).unwrap();
    }
}

#[test_log::test]
fn topic_rank_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("docs");
    fs::create_dir(&src).unwrap();
    corpus(&src);

    let matrix = "0.1 0.9\n0.7 0.3\n0.2 0.8\n0.9 0.1\n0.5 0.5\n";
    let matrix =
        topics::ProbabilityMatrix::from_reader(matrix.as_bytes(), Path::new("matrix")).unwrap();
    let index_data: String = (0..5).map(|i| format!("{} {}.txt\n", i, i)).collect();
    let index =
        topics::DocumentIndex::from_reader(index_data.as_bytes(), Path::new("index")).unwrap();

    let ranking = matrix.rank(2).unwrap();
    let dst = dir.path().join("out");
    assert_eq!(topics::copy_top_documents(&ranking, &index, &src, &dst).unwrap(), 4);

    assert!(dst.join("0").join("3.txt").exists());
    assert!(dst.join("0").join("1.txt").exists());
    assert!(dst.join("1").join("0.txt").exists());
    assert!(dst.join("1").join("2.txt").exists());
    assert!(!dst.join("1").join("4.txt").exists());

    // same input, fresh destination: same bytes
    let dst2 = dir.path().join("out2");
    topics::copy_top_documents(&ranking, &index, &src, &dst2).unwrap();
    assert_eq!(snapshot(&dst), snapshot(&dst2));
}

#[test]
fn filter_then_sample() {
    let dir = tempfile::tempdir().unwrap();
    corpus(dir.path());

    let index_path = dir.path().join("groups.tsv");
    fs::write(&index_path, "0\t0.txt\t2.txt\t3.txt\n1\t4.txt\n2\t1.txt\t4.txt\n").unwrap();
    let index = GroupIndex::from_path(&index_path).unwrap();

    let filtered = entities::filter_index(&index, dir.path(), &entities::DEFAULT_TAGS).unwrap();
    let mut written = Vec::new();
    filtered.write_to(&mut written).unwrap();
    assert_eq!(String::from_utf8(written).unwrap(), "0\t0.txt\t3.txt\n2\t1.txt\n");

    let dst = tempfile::tempdir().unwrap();
    let n = sample::sample_groups(&filtered, dir.path(), dst.path(), None, sample::DEFAULT_SEED)
        .unwrap();
    assert_eq!(n, 3);
    assert!(dst.path().join("0").join("3.txt").exists());
    assert!(dst.path().join("2").join("1.txt").exists());
    assert!(!dst.path().join("1").exists());
}

#[test]
fn seeded_sampling_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let mut index = GroupIndex::default();
    let mut files = Vec::new();
    for i in 0..30 {
        let name = format!("{}.txt", i);
        fs::write(dir.path().join(&name), &name).unwrap();
        files.push(name);
    }
    index.insert(0, files);

    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    assert_eq!(sample::sample_groups(&index, dir.path(), a.path(), Some(5), 7).unwrap(), 5);
    assert_eq!(sample::sample_groups(&index, dir.path(), b.path(), Some(5), 7).unwrap(), 5);
    assert_eq!(snapshot(a.path()), snapshot(b.path()));
}

#[test]
fn recommend_from_topic_file() {
    let dir = tempfile::tempdir().unwrap();
    corpus(dir.path());
    let topics_path = dir.path().join("topics.tsv");
    fs::write(
        &topics_path,
        "0\t0.txt\thttps://example.org/0\n1\t2.txt\thttps://example.org/2\n0\t3.txt\thttps://example.org/3\n",
    )
    .unwrap();

    let docs = recommend::candidates(fs::File::open(&topics_path).unwrap(), 0, &topics_path).unwrap();
    let mut out = Vec::new();
    assert_eq!(recommend::recommend(&docs, dir.path(), "Ada", &mut out).unwrap(), 2);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "0.txt\thttps://example.org/0\n3.txt\thttps://example.org/3\n"
    );

    let err = recommend::candidates(fs::File::open(&topics_path).unwrap(), 5, &topics_path);
    assert!(matches!(err, Err(Error::TopicNotFound(5))));
}

#[test]
fn text_tools_are_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("in");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("concat.txt"), "a\nb\n\nc\n").unwrap();
    fs::write(src.join("countries.json"), r#"[{"name":"France"},{"name":"Peru"}]"#).unwrap();
    fs::write(src.join("annotated.tsv"), "_person\tword\t_location\n").unwrap();
    fs::write(src.join("langs.txt"), "en English\nfr French\n").unwrap();

    let run = |dst: &Path| {
        fs::create_dir(dst).unwrap();
        split::split_file(&src.join("concat.txt"), &dst.join("split"), "doc_").unwrap();
        countries::scrape_file(&src.join("countries.json"), &dst.join("countries.txt"), "name")
            .unwrap();
        annotations::check_files(&[src.join("annotated.tsv")], &dst.join("report.txt"), "_")
            .unwrap();
        let rendered = template::render_file(&src.join("langs.txt"), "langauges", "--Select--")
            .unwrap();
        fs::write(dst.join("template.vm"), rendered).unwrap();
        strip::strip_dir(&dst.join("split"), &dst.join("stripped"), 1).unwrap();
    };

    let a = dir.path().join("a");
    let b = dir.path().join("b");
    run(&a);
    run(&b);
    assert_eq!(snapshot(&a), snapshot(&b));

    assert_eq!(fs::read_to_string(a.join("report.txt")).unwrap(), "_person\t_location\t");
    assert_eq!(fs::read_to_string(a.join("countries.txt")).unwrap(), "France\nPeru\n");
    assert_eq!(
        fs::read_to_string(a.join("template.vm")).unwrap(),
        r#"#set($langauges = ["--Select--","English-en","French-fr"])"#
    );
    assert_eq!(fs::read_to_string(a.join("stripped").join("doc_1.txt")).unwrap(), "\nb\n");
}
