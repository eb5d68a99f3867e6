//! Benchmarks for element tree rendering.

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oven_element::{Element, Reference};

/// Build a `ul` with `items` list items, each holding a link and a flag input.
fn wide_tree(items: usize) -> Element {
    let mut ul = Element::new("ul").with_attribute("class", "nav");
    for i in 0..items {
        let link = Element::new("a")
            .with_attribute("href", format!("/page/{i}"))
            .with_text(format!("Page {i} & more"));
        let input = Element::new("input")
            .with_attribute("type", "checkbox")
            .with_flag("checked");
        let mut li = Element::new("li");
        li.set_children([link, input]).unwrap();
        ul.add_child(li).unwrap();
    }
    ul
}

/// Build a chain of nested `div`s.
fn deep_tree(depth: usize) -> Element {
    let mut node = Element::new("span").with_text("leaf");
    for level in 0..depth {
        node = Element::new("div")
            .with_attribute("data-level", level.to_string())
            .try_with_child(node)
            .unwrap();
    }
    node
}

fn bench_render_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_wide");

    for items in [10, 100, 1000] {
        let tree = wide_tree(items);
        group.throughput(Throughput::Elements(items as u64));
        group.bench_with_input(BenchmarkId::from_parameter(items), &tree, |b, tree| {
            b.iter(|| tree.render());
        });
    }

    group.finish();
}

fn bench_render_deep(c: &mut Criterion) {
    let tree = deep_tree(200);

    c.bench_function("render_deep_200", |b| {
        b.iter(|| tree.render());
    });
}

fn bench_render_xhtml(c: &mut Criterion) {
    let reference = Arc::new(Reference::xhtml());
    let mut tree = wide_tree(100);
    tree.set_reference(Arc::clone(&reference));
    tree.each_child(|li| {
        li.set_reference(Arc::clone(&reference));
        li.each_child(|child| child.set_reference(Arc::clone(&reference)));
    });

    c.bench_function("render_xhtml_100", |b| {
        b.iter(|| tree.render());
    });
}

criterion_group!(
    benches,
    bench_render_wide,
    bench_render_deep,
    bench_render_xhtml
);
criterion_main!(benches);
