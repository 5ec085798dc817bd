use super::*;

/// Purely random placement: every cell is equally likely to hold a mine and no cell is picked twice.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::prelude::*;
        use rand::seq::index;

        let total_cells = config.total_cells();
        let mine_count = config.mine_count();

        let mut mines: Array2<bool> = Array2::default(config.dim());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        {
            let cells = mines.as_slice_mut().expect("layout should be standard");
            for place in index::sample(&mut rng, total_cells as usize, mine_count as usize) {
                cells[place] = true;
            }
        }

        let layout = MineLayout::from_mine_mask(mines);

        // double check mine count
        if layout.mine_count() != mine_count {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                mine_count
            );
        }
        layout
    }
}
