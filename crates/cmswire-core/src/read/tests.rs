use super::*;
use crate::{
    error::ErrorClass,
    test_fixtures::{Article, Author, Block, Quote, RichText},
    types::Media,
};
use cmswire_derive::Content;
use serde_json::json;

#[derive(Content, Debug, Default, Deserialize, PartialEq)]
#[content(collection = "pages")]
#[serde(default, rename_all = "camelCase")]
struct Page {
    document_id: Option<String>,
    lead: Option<Block>,
}

fn article_node(blocks: WireNode) -> WireNode {
    json!({
        "id": 1,
        "documentId": "art-1",
        "title": "t",
        "cover": { "id": 5, "url": "/uploads/cover.png", "formats": null },
        "author": { "documentId": "a1", "name": "Ada" },
        "blocks": blocks,
        "createdAt": "2024-01-01T00:00:00.000Z",
    })
}

fn known_and_unknown_blocks() -> WireNode {
    json!([
        { "__component": "rich-text", "id": 1, "body": "x" },
        { "__component": "video", "id": 2, "url": "v.mp4" },
        { "id": 3, "body": "orphan" },
        { "__component": "quote", "id": 4, "title": "q", "body": "y" },
    ])
}

#[test]
fn decodes_a_populated_article() {
    let node = article_node(json!([
        { "__component": "rich-text", "id": 1, "body": "x" },
        { "__component": "quote", "id": 2, "title": "q", "body": "y" },
    ]));
    let article: Article = decode(node, ReadMode::Strict).unwrap();

    assert_eq!(article.document_id.as_deref(), Some("art-1"));
    assert_eq!(article.cover.as_ref().and_then(|m| m.id), Some(5));
    assert_eq!(
        article.author.as_ref().map(|a| a.name.as_str()),
        Some("Ada")
    );
    assert_eq!(
        article.blocks,
        [
            Block::RichText(RichText {
                id: Some(1),
                body: "x".to_string(),
            }),
            Block::Quote(Quote {
                id: Some(2),
                title: "q".to_string(),
                body: "y".to_string(),
            }),
        ]
    );
}

#[test]
fn strict_mode_rejects_unknown_discriminators() {
    let err = decode::<Article>(article_node(known_and_unknown_blocks()), ReadMode::Strict)
        .unwrap_err();

    assert!(matches!(
        &err,
        ReadError::Registry(RegistryError::NotRecognized { discriminator, .. })
            if discriminator == "video"
    ));
    assert_eq!(err.class(), ErrorClass::UnknownDiscriminator);
}

#[test]
fn strict_mode_rejects_missing_discriminators() {
    let node = article_node(json!([{ "id": 3, "body": "orphan" }]));
    let err = decode::<Article>(node, ReadMode::Strict).unwrap_err();

    assert!(matches!(err, ReadError::MissingDiscriminator { .. }));
}

#[test]
fn lenient_mode_drops_unreadable_list_elements() {
    let article: Article =
        decode(article_node(known_and_unknown_blocks()), ReadMode::Lenient).unwrap();

    assert_eq!(article.blocks.len(), 2);
    assert!(matches!(article.blocks[0], Block::RichText(_)));
    assert!(matches!(article.blocks[1], Block::Quote(_)));
}

#[test]
fn prune_reports_the_number_of_drops() {
    let mut node = article_node(known_and_unknown_blocks());
    let dropped = prune_unknown(Article::model(), &mut node).unwrap();

    assert_eq!(dropped, 2);
    assert_eq!(node["blocks"].as_array().map(Vec::len), Some(2));
}

#[test]
fn lenient_mode_nulls_a_single_unknown_component() {
    let node = json!({
        "documentId": "p1",
        "lead": { "__component": "video", "url": "v.mp4" },
    });

    let page: Page = decode(node.clone(), ReadMode::Lenient).unwrap();
    assert_eq!(page.lead, None);

    assert!(decode::<Page>(node, ReadMode::Strict).is_err());
}

#[test]
fn reconciliation_reaches_nested_relations() {
    let node = json!({
        "documentId": "a1",
        "name": "Ada",
        "avatar": null,
        "articles": [article_node(known_and_unknown_blocks())],
    });

    let author: Author = decode(node, ReadMode::Lenient).unwrap();
    assert_eq!(author.articles[0].blocks.len(), 2);
}

#[test]
fn unpopulated_relations_are_left_to_serde() {
    let node = json!({ "documentId": "a1", "name": "Ada", "avatar": null });
    let author: Author = decode(node, ReadMode::Strict).unwrap();

    assert!(author.articles.is_empty());
    assert_eq!(author.avatar, None::<Media>);
}

#[test]
fn decode_list_reconciles_each_element() {
    let node = json!([
        article_node(json!([])),
        article_node(known_and_unknown_blocks()),
    ]);

    let articles: Vec<Article> = decode_list(node.clone(), ReadMode::Lenient).unwrap();
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[1].blocks.len(), 2);

    assert!(decode_list::<Article>(node, ReadMode::Strict).is_err());
}

#[test]
fn union_decodes_by_discriminator() {
    let block: Block =
        decode_union(json!({ "__component": "quote", "title": "q", "body": "y" })).unwrap();
    assert_eq!(
        block,
        Block::Quote(Quote {
            id: None,
            title: "q".to_string(),
            body: "y".to_string(),
        })
    );

    let err = decode_union::<Block>(json!({ "body": "y" })).unwrap_err();
    assert!(matches!(err, ReadError::MissingDiscriminator { .. }));
}

#[test]
fn serde_path_uses_the_registry_too() {
    let block: Block = serde_json::from_value(json!({ "__component": "rich-text", "body": "x" }))
        .unwrap();
    assert!(matches!(block, Block::RichText(_)));

    let err = serde_json::from_value::<Block>(json!({ "__component": "video" })).unwrap_err();
    assert!(err.to_string().contains("not recognized"));
}

#[test]
fn envelope_round_trip() {
    let wrapped = envelope(json!({ "title": "t" }));
    assert_eq!(wrapped, json!({ "data": { "title": "t" } }));
    assert_eq!(unwrap_envelope(wrapped).unwrap(), json!({ "title": "t" }));

    assert!(matches!(
        unwrap_envelope(json!({ "title": "t" })),
        Err(ReadError::MissingEnvelope)
    ));
    assert!(matches!(
        unwrap_envelope(json!([1])),
        Err(ReadError::MissingEnvelope)
    ));
}

#[test]
fn read_mode_parses_and_defaults_to_strict() {
    assert_eq!(ReadMode::default(), ReadMode::Strict);
    assert_eq!(" Lenient ".parse::<ReadMode>(), Ok(ReadMode::Lenient));
    assert!("loose".parse::<ReadMode>().is_err());

    let mode: ReadMode = serde_json::from_value(json!("lenient")).unwrap();
    assert_eq!(mode, ReadMode::Lenient);
    assert_eq!(ReadMode::Strict.to_string(), "strict");
}
