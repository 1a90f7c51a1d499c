use rand::Rng;

use crate::name_list::ParticipantList;

/// Picks the VIP uniformly from everyone except the conductor at `exclude_index`.
///
/// Returns `None` when nobody is left to pick, i.e. for lists shorter than two.
pub fn pick_second_winner<'a, R: Rng + ?Sized>(
    list: &'a ParticipantList,
    exclude_index: usize,
    rng: &mut R,
) -> Option<(&'a str, usize)> {
    if !list.can_spin() {
        return None;
    }

    let pool: Vec<(usize, &str)> = list
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != exclude_index)
        .collect();

    let (index, name) = pool[rng.gen_range(0..pool.len())];
    Some((name, index))
}
