//! Integration tests for the shipped curriculum

use pretty_assertions::assert_eq;
use quickref::catalog::{LessonCatalog, Registry};
use std::collections::HashSet;

#[test]
fn test_lessons_ascending_and_unique() {
    let lessons = LessonCatalog::builtin().unwrap();
    let numbers: Vec<u32> = lessons.all_lessons().iter().map(|l| l.number).collect();
    assert_eq!(numbers, (1..=11).collect::<Vec<u32>>());
}

#[test]
fn test_every_lesson_has_examples() {
    let registry = Registry::builtin().unwrap();
    let lessons = LessonCatalog::builtin().unwrap();
    for lesson in lessons.all_lessons() {
        let members = lessons.members_of(lesson, &registry);
        assert!(!members.is_empty(), "lesson {} has no examples", lesson.number);
    }
}

#[test]
fn test_lesson_two_follows_category_order() {
    let registry = Registry::builtin().unwrap();
    let lessons = LessonCatalog::builtin().unwrap();
    let lesson = lessons.lesson_by_number(2).unwrap();
    assert_eq!(lesson.categories, &["Control Flow", "Strings", "Loops"]);

    let categories: Vec<&str> = lessons
        .members_of(lesson, &registry)
        .iter()
        .map(|e| e.category())
        .collect();
    let first_string = categories.iter().position(|c| *c == "Strings").unwrap();
    let first_loop = categories.iter().position(|c| *c == "Loops").unwrap();
    assert!(categories[..first_string].iter().all(|c| *c == "Control Flow"));
    assert!(categories[first_string..first_loop].iter().all(|c| *c == "Strings"));
    assert!(categories[first_loop..].iter().all(|c| *c == "Loops"));
}

#[test]
fn test_concurrency_is_unassigned() {
    let registry = Registry::builtin().unwrap();
    let lessons = LessonCatalog::builtin().unwrap();

    let unassigned: HashSet<&str> = lessons.unassigned(&registry).iter().map(|e| e.category()).collect();
    assert_eq!(unassigned, HashSet::from(["Concurrency"]));

    let curriculum: HashSet<&str> = lessons.curriculum(&registry).iter().map(|e| e.name()).collect();
    assert!(!curriculum.contains("thread_spawn"));
    assert!(!curriculum.contains("async_tasks"));
}

#[test]
fn test_curriculum_and_unassigned_cover_registry() {
    let registry = Registry::builtin().unwrap();
    let lessons = LessonCatalog::builtin().unwrap();
    let covered = lessons.curriculum(&registry).len() + lessons.unassigned(&registry).len();
    assert_eq!(covered, registry.len());
}

#[test]
fn test_unknown_lesson_number() {
    let lessons = LessonCatalog::builtin().unwrap();
    let err = lessons.lesson_by_number(99).unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("99"));
}
