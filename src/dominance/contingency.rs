/// An odometer over the pure choices available at a list of decision points.
///
/// Slot `i` ranges over `options[i]`; the first slot varies fastest. A slot without options
/// contributes a single "no choice" entry (reported as `None`), so the odometer always has
/// at least one contingency.
#[derive(Clone, Debug)]
pub struct Contingencies {
    options: Vec<Vec<usize>>,
    position: Vec<usize>,
}

impl Contingencies {
    pub fn new(options: Vec<Vec<usize>>) -> Contingencies {
        Contingencies {
            position: vec![0; options.len()],
            options,
        }
    }

    pub fn num_slots(&self) -> usize {
        self.options.len()
    }

    /// The choice currently selected for `slot`.
    pub fn choice(&self, slot: usize) -> Option<usize> {
        self.options[slot].get(self.position[slot]).copied()
    }

    /// Move to the next contingency. Returns `false` (and resets to the first one) once
    /// all contingencies were visited.
    pub fn advance(&mut self) -> bool {
        for slot in 0..self.options.len() {
            if self.position[slot] + 1 < self.options[slot].len() {
                self.position[slot] += 1;
                return true;
            }
            self.position[slot] = 0;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::dominance::contingency::Contingencies;

    fn collect(mut contingencies: Contingencies) -> Vec<Vec<Option<usize>>> {
        let mut result = Vec::new();
        loop {
            result.push(
                (0..contingencies.num_slots())
                    .map(|slot| contingencies.choice(slot))
                    .collect(),
            );
            if !contingencies.advance() {
                return result;
            }
        }
    }

    #[test]
    fn first_slot_varies_fastest() {
        let all = collect(Contingencies::new(vec![vec![0, 2], vec![1, 3, 4]]));
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], vec![Some(0), Some(1)]);
        assert_eq!(all[1], vec![Some(2), Some(1)]);
        assert_eq!(all[2], vec![Some(0), Some(3)]);
        assert_eq!(all[5], vec![Some(2), Some(4)]);
    }

    #[test]
    fn empty_slots_have_one_choice() {
        let all = collect(Contingencies::new(vec![vec![], vec![1, 2]]));
        assert_eq!(all, vec![vec![None, Some(1)], vec![None, Some(2)]]);

        let all = collect(Contingencies::new(Vec::new()));
        assert_eq!(all, vec![Vec::<Option<usize>>::new()]);
    }
}
