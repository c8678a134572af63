/// All orderings of `items` via Heap's algorithm. Equal items are not
/// deduplicated, so the result always holds `N!` entries.
pub fn permutations<T: Copy, const N: usize>(items: [T; N]) -> Vec<[T; N]> {
    let mut current = items;
    let mut result = vec![current];
    let mut counters = [0usize; N];
    let mut i = 1;

    while i < N {
        let Some(counter) = counters.get_mut(i) else {
            break;
        };
        if *counter < i {
            let j = if i % 2 == 0 { 0 } else { *counter };
            current.swap(j, i);
            result.push(current);
            *counter += 1;
            i = 1;
        } else {
            *counter = 0;
            i += 1;
        }
    }

    result
}
