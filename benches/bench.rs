use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ordered_bst::OrderedBinaryTree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by adding elements in ascending order. Since the tree never rebalances this is
/// as tall as a tree of this size gets.
fn get_unbalanced_tree(num_levels: usize) -> OrderedBinaryTree<i32> {
    (0..num_nodes_in_full_tree(num_levels) as i32).collect()
}

/// Builds a tree by adding elements so that, without any self-balancing, the resultant tree will
/// still be balanced.
///
/// It ensures there are `num_levels` of nodes, all full.
fn get_balanced_tree(num_levels: usize) -> OrderedBinaryTree<i32> {
    let mut tree = OrderedBinaryTree::new();
    let xs = (0..num_nodes_in_full_tree(num_levels) as i32).collect::<Vec<_>>();
    fill_balanced_tree(&mut tree, &xs);
    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut OrderedBinaryTree<i32>, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.extend([xs[mid]]);
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group. Each iteration gets a fresh clone of the tree so
/// removals don't pile up.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut OrderedBinaryTree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11] {
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) as i32 - 1;
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree));
                        time += instant.elapsed();
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "search", |tree, i| {
        let _node = black_box(tree.search(&i));
    });
    bench_helper(c, "search-miss", |tree, i| {
        let _node = black_box(tree.search(&(i + 1)));
    });
    bench_helper(c, "add", |tree, i| {
        let _added = black_box(tree.add(i + 1));
    });
    bench_helper(c, "remove-min", |tree, _| {
        let _min = black_box(tree.remove_min());
    });
    bench_helper(c, "remove-max", |tree, _| {
        let _max = black_box(tree.remove_max());
    });
    bench_helper(c, "height", |tree, _| {
        let _height = black_box(tree.height());
    });
    bench_helper(c, "postorder", |tree, _| {
        let _sum: i64 = black_box(tree.postorder_iter().map(|&x| x as i64).sum());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
