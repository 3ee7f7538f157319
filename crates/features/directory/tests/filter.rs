use proptest::prelude::*;
use seva_directory::{Choice, FilterCriteria, filter};
use seva_domain::directory::DirectoryEntry;

fn entry(id: usize, region: &str, sub: &str, tags: &[&str]) -> DirectoryEntry {
    DirectoryEntry {
        id: format!("am-{id}"),
        name: format!("Contact {id}"),
        region: region.into(),
        sub_region: sub.into(),
        postal_code: format!("4{id:05}"),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        ..DirectoryEntry::default()
    }
}

fn ten_entries() -> Vec<DirectoryEntry> {
    vec![
        entry(0, "Jalna", "Partur", &["medical_emergency"]),
        entry(1, "Jalna", "Ambad", &["blood_donation"]),
        entry(2, "Pune", "Haveli", &["medical_emergency"]),
        entry(3, "Jalna", "Jalna", &["medical_emergency", "elder_care"]),
        entry(4, "Beed", "Ashti", &["food_distribution"]),
        entry(5, "Nashik", "Sinnar", &["medical_emergency"]),
        entry(6, "Jalna", "Mantha", &[]),
        entry(7, "Thane", "Kalyan", &["counselling"]),
        entry(8, "Jalna", "Partur", &["blood_donation", "medical_emergency"]),
        entry(9, "Pune", "Mulshi", &["disaster_relief"]),
    ]
}

#[test]
fn tag_and_region_filter_returns_the_intersection() {
    let entries = ten_entries();
    let criteria = FilterCriteria::default().with_tag("medical_emergency").with_region("Jalna");

    let ids: Vec<String> = filter(&entries, &criteria).into_iter().map(|e| e.id).collect();
    assert_eq!(ids, ["am-0", "am-3", "am-8"]);
}

#[test]
fn sub_region_narrows_further() {
    let entries = ten_entries();
    let criteria = FilterCriteria::default()
        .with_tag("medical_emergency")
        .with_region("Jalna")
        .with_sub_region("Partur");

    assert_eq!(filter(&entries, &criteria).len(), 2);
}

#[test]
fn no_match_is_an_empty_vec() {
    let entries = ten_entries();
    let criteria = FilterCriteria::default().with_tag("elder_care").with_region("Pune");
    assert!(filter(&entries, &criteria).is_empty());
}

static REGIONS: [&str; 4] = ["Jalna", "Pune", "Beed", "Nashik"];
static SUBS: [&str; 5] = ["Partur", "Haveli", "Ashti", "Sinnar", "Ambad"];
static TAGS: [&str; 4] = ["medical_emergency", "blood_donation", "elder_care", "counselling"];

fn any_entry() -> impl Strategy<Value = DirectoryEntry> {
    (
        0usize..1000,
        proptest::sample::select(&REGIONS[..]),
        proptest::sample::select(&SUBS[..]),
        proptest::sample::subsequence(&TAGS[..], 0..=TAGS.len()),
        proptest::option::of("[A-Za-z ]{0,12}"),
    )
        .prop_map(|(id, region, sub, tags, organisation)| {
            let mut e = entry(id, region, sub, &tags);
            e.organisation = organisation;
            e
        })
}

fn choice(values: &'static [&'static str]) -> impl Strategy<Value = Choice<String>> {
    prop_oneof![
        Just(Choice::All),
        proptest::sample::select(values).prop_map(|v| Choice::Only(v.to_owned())),
    ]
}

fn any_criteria() -> impl Strategy<Value = FilterCriteria> {
    (choice(&TAGS), choice(&REGIONS), choice(&SUBS), prop_oneof![Just(String::new()), "[a-z]{1,3}"])
        .prop_map(|(tag, region, sub_region, search)| FilterCriteria {
            tag,
            region,
            sub_region,
            postal_code: Choice::All,
            search,
        })
}

proptest! {
    #[test]
    fn filtering_is_idempotent(
        entries in proptest::collection::vec(any_entry(), 0..30),
        criteria in any_criteria(),
    ) {
        let once = filter(&entries, &criteria);
        let twice = filter(&once, &criteria);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn all_criteria_keep_everything_in_order(
        entries in proptest::collection::vec(any_entry(), 0..30),
    ) {
        prop_assert_eq!(filter(&entries, &FilterCriteria::default()), entries);
    }

    #[test]
    fn result_is_an_ordered_subsequence(
        entries in proptest::collection::vec(any_entry(), 0..30),
        criteria in any_criteria(),
    ) {
        let kept = filter(&entries, &criteria);
        let mut rest = entries.iter();
        for entry in &kept {
            prop_assert!(rest.any(|e| e == entry));
        }
    }
}
