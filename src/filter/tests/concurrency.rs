use std::sync::Arc;
use std::thread;

use super::sample_filter;
use crate::filter::{Filter, TrieFilter};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn filter_is_send_and_sync() {
    assert_send_sync::<TrieFilter>();
}

#[test]
fn concurrent_queries_agree() {
    let filter = Arc::new(sample_filter());
    let texts = ["福-音会", "wtf 三去车仑", "这是一段干净的文本", "清海.无上师!"];

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let filter = Arc::clone(&filter);
            thread::spawn(move || {
                let text = texts[i % texts.len()];
                (0..200)
                    .map(|_| filter.replace(text, '*'))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let results = handle.join().unwrap();
        let expected = filter.replace(texts[i % texts.len()], '*');
        assert!(results.iter().all(|r| *r == expected));
    }
}

#[test]
fn scoped_readers_share_borrowed_filter() {
    let filter = sample_filter();
    let filter = &filter;
    let found: Vec<Vec<&str>> = thread::scope(|s| {
        let handles: Vec<_> = ["wtf福音会", "中国-教徒", "nothing here"]
            .into_iter()
            .map(|text| s.spawn(move || filter.find_all(text)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(found[0], vec!["wtf", "福音会"]);
    assert_eq!(found[1], vec!["中国-教徒"]);
    assert!(found[2].is_empty());
}
