
use std::{fs, path::Path};

use example_document::ExampleDocument;
use note_merge::merge_text;
use serde::Deserialize;

#[test]
fn test_document_current_first() {
    for doc in &get_all_documents() {
        doc.assert_eq(&merge_text(doc.original(), doc.current(), doc.proposed()));
    }
}

#[test]
fn test_document_proposed_first() {
    for doc in get_all_documents().iter().filter(|doc| doc.is_symmetric()) {
        doc.assert_eq(&merge_text(doc.original(), doc.proposed(), doc.current()));
    }
}

#[test]
fn test_document_identity() {
    for doc in &get_all_documents() {
        for text in [doc.original(), doc.current(), doc.proposed()] {
            let merged = merge_text(text, text, text);

            assert_eq!(merged.text(), text);
            assert!(!merged.has_conflicts());
        }
    }
}

#[test]
fn test_documents_are_found() {
    assert!(get_all_documents().len() >= 10);
}

fn get_all_documents() -> Vec<ExampleDocument> {
    let examples_dir = Path::new("tests/examples");
    let entries = fs::read_dir(examples_dir)
        .expect("Failed to read examples directory")
        .collect::<Vec<_>>();

    let mut documents = Vec::new();

    for entry in entries {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();

        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("yml") {
            let file = fs::File::open(&path).expect("Failed to open example file");
            for document in serde_yaml::Deserializer::from_reader(file) {
                let doc =
                    ExampleDocument::deserialize(document).expect("Failed to deserialize document");
                documents.push(doc);
            }
        }
    }

    documents
}
