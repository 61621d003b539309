use collection::{Collection, ErrorKind, NaturalStringComparer, collection};
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test]
fn test_add() {
    let mut list = Collection::new();

    list.add("one");
    assert_eq!(list, Collection::from(["one"]));

    list.add("two");
    assert_eq!(list, Collection::from(["one", "two"]));

    list.add("three");
    assert_eq!(list, Collection::from(["one", "two", "three"]));
}

#[test]
fn test_clear() {
    let mut list = collection!["one", "two", "three"];
    list.clear();
    assert_eq!(list, Collection::new());
}

#[test]
fn test_copy_to_default_behavior() {
    let list = collection!["one", "two", "three"];
    let mut target = Vec::new();

    list.copy_to(&mut target);

    assert_eq!(target, ["one", "two", "three"]);
}

#[test]
fn test_copy_to_with_index_in_middle() {
    let list = collection!["one", "two", "three"];
    let mut target = vec!["testing", "testing", "now", "done"];

    list.copy_to_at(&mut target, 2).unwrap();

    assert_eq!(target, ["testing", "testing", "one", "two", "three"]);
}

#[test]
fn test_copy_to_with_index_at_end() {
    let list = collection!["one", "two", "three"];
    let mut target = vec!["testing", "testing"];
    let end = target.len();

    list.copy_to_at(&mut target, end).unwrap();

    assert_eq!(target, ["testing", "testing", "one", "two", "three"]);
}

#[test]
fn test_copy_to_index_less_than_zero() {
    let list: Collection<&str> = Collection::new();
    let mut target = vec!["one", "two", "three"];

    let err = list.copy_to_at(&mut target, -1).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(target, ["one", "two", "three"]);
}

#[test]
fn test_copy_to_index_not_a_number() {
    let list: Collection<&str> = Collection::new();
    let mut target = vec!["one", "two", "three"];

    let err = list.copy_to_at(&mut target, "j").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_exists() {
    let list = collection!["one", "two", "three"];
    assert!(list.exists(|s| s.len() > 3));
}

#[test]
fn test_exists_when_not() {
    let list = collection!["one", "two", "three"];
    assert!(!list.exists(|&s| s == "four"));
}

#[test]
fn test_find() {
    let list = collection![1, 2, 3, 4, 5, 6];

    assert_eq!(list.find(|&x| x > 4), Some(&5));
    assert_eq!(list.find(|&x| x > 6), None);
}

#[test]
fn test_find_all() {
    let list = collection![1, 2, 3, 4, 5, 6];

    assert_eq!(list.find_all(|&x| x > 3).to_vec(), [4, 5, 6]);
    assert!(list.find_all(|&x| x > 6).to_vec().is_empty());
    assert_eq!(list.len(), 6);
}

#[test]
fn test_for_each() {
    let expected = ["one", "two", "three"];
    let list = Collection::from(expected);
    let mut counter = 0;

    for (index, value) in &list {
        assert_eq!(index, counter);
        assert_eq!(*value, expected[counter]);
        counter += 1;
    }

    assert_eq!(counter, expected.len());
}

#[test]
fn test_get_item() {
    let mut list = Collection::new();
    list.add(1);

    assert_eq!(list[0], 1);
    assert_eq!(list.get(0), Ok(&1));
}

#[test]
fn test_get_item_out_of_bounds() {
    let list: Collection<i32> = Collection::new();
    assert_eq!(list.get(0).unwrap_err().kind(), ErrorKind::ArgumentOutOfRange);
}

#[test]
fn test_get_item_invalid_argument() {
    let list: Collection<i32> = Collection::new();
    assert_eq!(list.get("j").unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_set_item() {
    let mut list = Collection::new();
    list.add(1);
    list[0] = 2;

    assert_eq!(list[0], 2);
}

#[test]
fn test_set_item_out_of_bounds() {
    let mut list = Collection::new();
    assert_eq!(list.set(0, 2).unwrap_err().kind(), ErrorKind::ArgumentOutOfRange);
    assert!(list.is_empty());
}

#[test]
fn test_set_item_invalid_argument() {
    let mut list = collection![1];
    assert_eq!(list.set("j", 2).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(list.to_vec(), [1]);
}

#[test]
fn test_remove() {
    let mut list = Collection::new();
    list.add("one");
    list.add("two");

    assert!(list.remove(&"one"));

    assert_eq!(list.to_vec(), ["two"]);
}

#[test]
fn test_remove_missing_value_is_a_no_op() {
    let mut list = collection!["one", "two"];
    assert!(!list.remove(&"three"));
    assert_eq!(list.to_vec(), ["one", "two"]);
}

#[test]
fn test_remove_at() {
    let mut list = collection!["one", "two", "three"];

    assert_eq!(list.remove_at(1), Ok("two"));

    assert_eq!(list.to_vec(), ["one", "three"]);
}

#[test]
fn test_remove_at_invalid_argument() {
    let mut list: Collection<&str> = Collection::new();
    assert_eq!(list.remove_at("j").unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_remove_at_out_of_range() {
    let mut list: Collection<&str> = Collection::new();
    assert_eq!(list.remove_at(1).unwrap_err().kind(), ErrorKind::ArgumentOutOfRange);
}

#[test]
fn test_remove_all() {
    let mut list = collection![1, 2, 3, 4, 3, 5, 3];

    assert_eq!(list.remove_all(|&x| x == 3), 3);

    assert_eq!(list.to_vec(), [1, 2, 4, 5]);
}

#[test_case(0, 4, &[5, 6] ; "from the start")]
#[test_case(3, 3, &[1, 2, 3] ; "through the end")]
#[test_case(2, 2, &[1, 2, 5, 6] ; "in the middle")]
#[test_case(6, 0, &[1, 2, 3, 4, 5, 6] ; "empty at the end")]
fn test_remove_range(start: i32, count: i32, expected: &[i32]) {
    let mut list = collection![1, 2, 3, 4, 5, 6];
    list.remove_range(start, count).unwrap();
    assert_eq!(list.to_vec(), expected);
}

#[test]
fn test_insert() {
    let mut list = collection!["one", "two"];

    list.insert(1, "three").unwrap();

    assert_eq!(list.to_vec(), ["one", "three", "two"]);
}

#[test]
fn test_insert_invalid_argument() {
    let mut list = Collection::new();
    assert_eq!(list.insert("j", "one").unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_insert_out_of_range() {
    let mut list = Collection::new();
    assert_eq!(list.insert(4, "one").unwrap_err().kind(), ErrorKind::ArgumentOutOfRange);
}

#[test]
fn test_insert_plus_one() {
    let mut list = collection!["one"];

    list.insert(1, "two").unwrap();

    assert_eq!(list.to_vec(), ["one", "two"]);
}

#[test]
fn test_index_of() {
    let list = collection!["one", "two", "three"];

    assert_eq!(list.index_of(&"two"), Some(1));
    assert_eq!(list.index_of(&"four"), None);
}

#[test]
fn test_sort_numeric() {
    let mut list = collection![2, 5, 3, 1, 4];

    list.sort();

    assert_eq!(list.to_vec(), [1, 2, 3, 4, 5]);
}

#[test]
fn test_sort_alpha_numeric() {
    let mut list = collection!["img12.png", "img2.png", "img10.png", "img1.png"];

    list.sort();

    assert_eq!(
        list.to_vec(),
        ["img1.png", "img10.png", "img12.png", "img2.png"]
    );
}

#[test]
fn test_sort_with_natural() {
    let mut list = collection!["img12.png", "img2.png", "img10.png", "img1.png"];

    list.sort_with(&NaturalStringComparer);

    assert_eq!(
        list.to_vec(),
        ["img1.png", "img2.png", "img10.png", "img12.png"]
    );
}

#[test]
fn test_sort_owned_strings_with_natural() {
    let mut list: Collection<String> = ["page10", "page9", "page1"]
        .into_iter()
        .map(String::from)
        .collect();

    list.sort_with(&NaturalStringComparer);

    assert_eq!(list.to_vec(), ["page1", "page9", "page10"]);
}
