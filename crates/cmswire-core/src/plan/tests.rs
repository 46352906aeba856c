use super::*;
use crate::{
    test_fixtures::{Article, Author, Category, Homepage, MediaBlock, Post, RichText},
    types::Media,
};
use cmswire_derive::{ComponentUnion, Content};
use proptest::prelude::*;
use serde::Deserialize;

// Two variants sharing a navigational field name.
#[derive(Content, Deserialize)]
#[content(component = "gallery")]
struct Gallery {
    file: Option<Media>,
}

#[allow(dead_code)]
#[derive(ComponentUnion)]
enum Hero {
    Media(MediaBlock),
    Gallery(Gallery),
}

#[derive(Content)]
#[content(collection = "landings")]
struct Landing {
    document_id: Option<String>,
    hero: Vec<Hero>,
}

fn paths(plan: &PopulatePlan) -> Vec<&str> {
    plan.iter().map(String::as_str).collect()
}

#[test]
fn post_at_depth_one_expands_direct_references_only() {
    let plan = plan_for::<Post>(1);

    assert_eq!(paths(&plan), ["author", "category", "cover"]);
}

#[test]
fn depth_zero_plans_nothing() {
    assert!(plan_for::<Post>(0).is_empty());
    assert!(plan_for::<Homepage>(0).is_empty());
}

#[test]
fn deeper_plans_follow_declaration_order() {
    let plan = plan_for::<Post>(2);

    // audit is an opaque object without navigation and never appears
    assert_eq!(
        paths(&plan),
        [
            "author",
            "author.avatar",
            "author.articles",
            "category",
            "category.parent",
            "cover",
        ]
    );
}

#[test]
fn cycles_terminate_with_a_large_bound() {
    let plan = plan_for::<Article>(64);

    assert_eq!(
        paths(&plan),
        [
            "cover",
            "author",
            "author.avatar",
            "author.articles",
            "blocks",
            "blocks.file",
        ]
    );
}

#[test]
fn singleton_plan_enters_opaque_objects_with_media() {
    let plan = plan_for::<Homepage>(3);

    assert_eq!(
        paths(&plan),
        [
            "featured",
            "featured.cover",
            "featured.author",
            "featured.author.avatar",
            "featured.author.articles",
            "featured.blocks",
            "featured.blocks.file",
            "seo",
            "seo.shareImage",
        ]
    );
}

#[test]
fn self_reference_is_emitted_but_not_entered() {
    let plan = plan_for::<Category>(10);

    assert_eq!(paths(&plan), ["parent"]);
}

#[test]
fn components_without_navigation_plan_nothing() {
    assert!(plan_for::<RichText>(5).is_empty());
}

#[test]
fn union_variants_sharing_a_path_emit_it_once() {
    let plan = plan_for::<Landing>(3);

    assert_eq!(paths(&plan), ["hero", "hero.file"]);
}

#[test]
fn populate_query_numbers_each_path() {
    let query = populate_query(&plan_for::<Post>(1));

    assert_eq!(
        query,
        [
            ("populate[0]".to_string(), "author".to_string()),
            ("populate[1]".to_string(), "category".to_string()),
            ("populate[2]".to_string(), "cover".to_string()),
        ]
    );
}

#[test]
fn plan_iterates_owned_and_borrowed() {
    let plan = plan_for::<Post>(1);
    let borrowed: Vec<&String> = (&plan).into_iter().collect();
    assert_eq!(borrowed.len(), 3);

    let owned: Vec<String> = plan.into_iter().collect();
    assert_eq!(owned[0], "author");
}

fn plan_of(root: usize, depth: usize) -> PopulatePlan {
    match root {
        0 => plan_for::<Article>(depth),
        1 => plan_for::<Author>(depth),
        2 => plan_for::<Category>(depth),
        3 => plan_for::<Homepage>(depth),
        _ => plan_for::<Post>(depth),
    }
}

proptest! {
    #[test]
    fn no_path_exceeds_the_depth_bound(root in 0..5_usize, depth in 0..8_usize) {
        let plan = plan_of(root, depth);

        for path in plan.iter() {
            prop_assert!(path.split('.').count() <= depth);
        }
    }

    #[test]
    fn plans_have_no_duplicates(root in 0..5_usize, depth in 0..8_usize) {
        let plan = plan_of(root, depth);
        let unique: BTreeSet<&String> = plan.iter().collect();

        prop_assert_eq!(unique.len(), plan.len());
    }
}
