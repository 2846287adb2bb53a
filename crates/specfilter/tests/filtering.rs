use specfilter::attributes::{AttrValue, AttributeKind, AttributeSpec, Attributed};
use specfilter::error::{FilterError, Result};
use specfilter::filter::{filter, filter_all};
use specfilter::model::{color_is, name_is, sample_products, size_is, Color, Product, Size};
use specfilter::spec::{AttrSpec, Spec, Specification};

const COLORS: [Color; 3] = [Color::Red, Color::Green, Color::Blue];
const SIZES: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

/// Every color/size combination, twice, so the catalog has duplicates.
fn full_catalog() -> Vec<Product> {
    let mut products = Vec::new();
    for round in 0..2 {
        for color in COLORS {
            for size in SIZES {
                products.push(Product::new(format!("{color}-{size}-{round}"), color, size));
            }
        }
    }
    products
}

fn all_specs() -> Vec<Spec> {
    let mut specs: Vec<Spec> = COLORS.iter().map(|c| color_is(*c)).collect();
    specs.extend(SIZES.iter().map(|s| size_is(*s)));
    specs.push(name_is("Red-Small-0"));
    specs.push(Spec::is_not("color", AttrValue::Enum("Green".into())));
    specs
}

fn positions(items: &[Product], found: &[&Product]) -> Vec<usize> {
    found
        .iter()
        .map(|f| {
            items
                .iter()
                .position(|p| std::ptr::eq(p, *f))
                .expect("result must point into the input")
        })
        .collect()
}

#[test]
fn test_canonical_scenario() {
    let products = sample_products();
    let names = |spec: &Spec| -> Vec<String> {
        filter_all(&products, spec)
            .unwrap()
            .into_iter()
            .map(|p| p.name.clone())
            .collect()
    };

    assert_eq!(names(&color_is(Color::Green)), vec!["Tree"]);
    assert_eq!(names(&size_is(Size::Large)), vec!["Tree", "Room"]);
    assert_eq!(
        names(&(size_is(Size::Large) & color_is(Color::Blue))),
        vec!["Room"]
    );
    assert!(names(&(color_is(Color::Red) & size_is(Size::Large))).is_empty());
}

#[test]
fn test_filtering_twice_gives_the_same_result() {
    let products = full_catalog();
    for spec in all_specs() {
        let first = filter_all(&products, &spec).unwrap();
        let second = filter_all(&products, &spec).unwrap();
        assert_eq!(positions(&products, &first), positions(&products, &second));
    }
}

#[test]
fn test_results_preserve_input_order() {
    let products = full_catalog();
    for a in all_specs() {
        for b in all_specs() {
            let spec = a.clone() & b;
            let found = filter_all(&products, &spec).unwrap();
            let idx = positions(&products, &found);
            assert!(idx.windows(2).all(|w| w[0] < w[1]), "{spec}: {idx:?}");
        }
    }
}

#[test]
fn test_duplicates_in_input_are_kept() {
    let products = vec![
        Product::new("Twin", Color::Red, Size::Small),
        Product::new("Twin", Color::Red, Size::Small),
    ];
    let found = filter_all(&products, &name_is("Twin")).unwrap();
    assert_eq!(found.len(), 2);
}

#[test]
fn test_conjunction_matches_both_operands() {
    let products = full_catalog();
    for a in all_specs() {
        for b in all_specs() {
            let combined = a.clone() & b.clone();
            for item in &products {
                assert_eq!(
                    combined.is_satisfied(item).unwrap(),
                    a.is_satisfied(item).unwrap() && b.is_satisfied(item).unwrap()
                );
            }
        }
    }
}

#[test]
fn test_combination_is_associative() {
    let products = full_catalog();
    let specs = all_specs();
    for a in &specs {
        for b in &specs {
            for c in &specs {
                let left = (a.clone() & b.clone()) & c.clone();
                let right = a.clone() & (b.clone() & c.clone());
                for item in &products {
                    assert_eq!(
                        left.is_satisfied(item).unwrap(),
                        right.is_satisfied(item).unwrap()
                    );
                }
            }
        }
    }
}

#[test]
fn test_matching_nothing_or_everything() {
    let products: Vec<Product> = full_catalog()
        .into_iter()
        .filter(|p| p.size == Size::Medium)
        .collect();

    assert!(filter_all(&products, &size_is(Size::Small)).unwrap().is_empty());

    let everything = filter_all(&products, &size_is(Size::Medium)).unwrap();
    assert_eq!(everything.len(), products.len());
    assert_eq!(positions(&products, &everything), (0..products.len()).collect::<Vec<_>>());
}

#[test]
fn test_parsed_conditions_match_typed_helpers() {
    let parsed = Spec::all(vec![
        Spec::from(AttrSpec::parse::<Product>("size=large").unwrap()),
        Spec::from(AttrSpec::parse::<Product>("color=blue").unwrap()),
    ])
    .unwrap();
    assert_eq!(parsed, size_is(Size::Large) & color_is(Color::Blue));
}

// A specification the library knows nothing about still works with the
// engine, alone or wrapped with library specifications.
struct NameStartsWith(&'static str);

impl Specification<Product> for NameStartsWith {
    fn is_satisfied(&self, item: &Product) -> Result<bool> {
        Ok(item.name.starts_with(self.0))
    }
}

struct Both<A, B>(A, B);

impl<I, A: Specification<I>, B: Specification<I>> Specification<I> for Both<A, B> {
    fn is_satisfied(&self, item: &I) -> Result<bool> {
        Ok(self.0.is_satisfied(item)? && self.1.is_satisfied(item)?)
    }
}

#[test]
fn test_engine_accepts_custom_specifications() {
    let products = full_catalog();
    let custom = NameStartsWith("Blue");
    assert_eq!(filter_all(&products, &custom).unwrap().len(), 6);

    let mixed = Both(NameStartsWith("Blue"), size_is(Size::Small));
    let found = filter_all(&products, &mixed).unwrap();
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|p| p.color == Color::Blue && p.size == Size::Small));

    let dynamic: Vec<Box<dyn Specification<Product>>> =
        vec![Box::new(custom), Box::new(color_is(Color::Red))];
    for spec in &dynamic {
        assert_eq!(filter(&products, spec).count(), 6);
    }
}

// An item type whose attributes are optional, to exercise the
// missing-attribute contract.
struct Record {
    label: Option<String>,
}

impl Attributed for Record {
    const ATTRIBUTES: &'static [AttributeSpec] = &[AttributeSpec::new("label", AttributeKind::Text)];

    fn get_attr(&self, name: &str) -> Option<AttrValue> {
        match name {
            "label" => self.label.clone().map(AttrValue::Text),
            _ => None,
        }
    }
}

#[test]
fn test_missing_attribute_surfaces_as_error() {
    let records = vec![
        Record {
            label: Some("a".into()),
        },
        Record { label: None },
        Record {
            label: Some("b".into()),
        },
    ];
    let spec = Spec::is("label", AttrValue::Text("b".into()));
    assert!(spec.validate::<Record>().is_ok());

    let results: Vec<_> = filter(&records, &spec).collect();
    assert_eq!(results.len(), 2);
    assert!(matches!(
        results[0],
        Err(FilterError::MissingAttribute { ref attr }) if attr == "label"
    ));
    assert!(matches!(results[1], Ok(r) if r.label.as_deref() == Some("b")));

    assert!(filter_all(&records, &spec).is_err());
}

#[test]
fn test_specifications_are_shareable_across_threads() {
    let spec = size_is(Size::Large) & color_is(Color::Green);
    let products = full_catalog();
    let (products, spec) = (&products, &spec);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || filter_all(products, spec).unwrap().len()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
    });
}
