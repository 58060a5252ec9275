//! Dunham's exposure rules: how a placed tile branches into new tiles.
//!
//! Each tile generated beyond layer 0 is classified by its *exposure*, the
//! number of its vertices still facing unexplored territory. The tables below
//! decide, per exposure and position in the traversal, which edge to start
//! from (`p_skip`, `q_skip`) and how many vertices and polygons to branch
//! into, so that every tile within the traversal depth is produced exactly
//! once. For triangles (`p == 3`) a tile only ever branches from its first
//! vertex, so the triangle polygon counts take precedence over the
//! first-vertex count.

/// Exposure level of a placed tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Exposure {
    /// `q - 2`
    Min,
    /// `q - 1`
    Max,
}

/// Pure lookup tables for a {p,q} tiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExposureRules {
    p: usize,
    q: usize,
}

impl ExposureRules {
    #[inline]
    pub fn new(p: usize, q: usize) -> Self {
        Self { p, q }
    }

    #[inline]
    pub fn p(&self) -> usize {
        self.p
    }

    #[inline]
    pub fn q(&self) -> usize {
        self.q
    }

    /// Numeric exposure: `q - 2` for `Min`, `q - 1` for `Max`.
    #[inline]
    pub fn level(&self, e: Exposure) -> usize {
        match e {
            Exposure::Min => self.q - 2,
            Exposure::Max => self.q - 1,
        }
    }

    /// Exposure of the child at (vertex `v`, polygon `j`) of a tile in `layer`.
    pub fn exposure(&self, layer: usize, v: usize, j: usize) -> Exposure {
        let q3 = self.q == 3;
        if layer == 0 {
            return match (j == 0, q3) {
                (true, true) => Exposure::Max,
                (true, false) => Exposure::Min,
                (false, _) => Exposure::Max,
            };
        }
        match (v == 0, j == 0) {
            (true, true) => Exposure::Min,
            (true, false) if q3 => Exposure::Min,
            (true, false) => Exposure::Max,
            (false, true) if q3 => Exposure::Max,
            (false, true) => Exposure::Min,
            (false, false) => Exposure::Max,
        }
    }

    /// Edge offset (from the entry edge) of the first vertex to branch at.
    pub fn p_skip(&self, e: Exposure) -> i64 {
        match e {
            Exposure::Min if self.q != 3 => 1,
            Exposure::Min => 3,
            Exposure::Max if self.p == 3 => 1,
            Exposure::Max if self.q == 3 => 2,
            Exposure::Max => 0,
        }
    }

    /// Extra edge offset applied before walking round vertex `v`.
    pub fn q_skip(&self, e: Exposure, v: usize) -> i64 {
        match (e, v == 0) {
            (Exposure::Min, true) if self.q != 3 => -1,
            (Exposure::Min, true) => 0,
            (Exposure::Min, false) if self.p == 3 => -1,
            (Exposure::Min, false) => 0,
            (Exposure::Max, true) if self.p == 3 || self.q == 3 => 0,
            (Exposure::Max, true) => -1,
            (Exposure::Max, false) => 0,
        }
    }

    /// Number of vertices of the tile to branch at.
    pub fn vertices_to_do(&self, e: Exposure) -> usize {
        if self.p == 3 {
            return 1;
        }
        let q3 = self.q == 3;
        match e {
            Exposure::Min if q3 => self.p.saturating_sub(5),
            Exposure::Min => self.p.saturating_sub(3),
            Exposure::Max if q3 => self.p.saturating_sub(4),
            Exposure::Max => self.p.saturating_sub(2),
        }
    }

    /// Number of polygons to generate around vertex `v`.
    pub fn pgons_to_do(&self, e: Exposure, v: usize) -> usize {
        if self.q == 3 {
            return 1;
        }
        if self.p == 3 {
            return match e {
                Exposure::Min => self.q.saturating_sub(4),
                Exposure::Max => self.q.saturating_sub(3),
            };
        }
        if v == 0 {
            self.q - 3
        } else {
            self.q - 2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_layer_exposure_for_square_five_tiling() {
        let r = ExposureRules::new(4, 5);
        let e = r.exposure(0, 0, 0);
        assert_eq!(e, Exposure::Min);
        assert_eq!(r.level(e), 3);
        assert_eq!(r.p_skip(e), 1);
        assert_eq!(r.level(Exposure::Max), 4);
    }

    #[test]
    fn layer_zero_ignores_vertex_index() {
        let r = ExposureRules::new(5, 4);
        for v in 0..5 {
            assert_eq!(r.exposure(0, v, 0), Exposure::Min);
            assert_eq!(r.exposure(0, v, 1), Exposure::Max);
        }
        let r3 = ExposureRules::new(7, 3);
        assert_eq!(r3.exposure(0, 0, 0), Exposure::Max);
    }

    #[test]
    fn deeper_layer_case_table() {
        let r = ExposureRules::new(5, 4);
        assert_eq!(r.exposure(2, 0, 0), Exposure::Min);
        assert_eq!(r.exposure(2, 0, 1), Exposure::Max);
        assert_eq!(r.exposure(2, 1, 0), Exposure::Min);
        assert_eq!(r.exposure(2, 1, 1), Exposure::Max);

        let r3 = ExposureRules::new(7, 3);
        assert_eq!(r3.exposure(1, 0, 0), Exposure::Min);
        assert_eq!(r3.exposure(1, 0, 1), Exposure::Min);
        assert_eq!(r3.exposure(1, 1, 0), Exposure::Max);
        assert_eq!(r3.exposure(1, 1, 1), Exposure::Max);
    }

    #[test]
    fn skip_tables() {
        let r = ExposureRules::new(5, 4);
        assert_eq!(r.p_skip(Exposure::Max), 0);
        assert_eq!(r.q_skip(Exposure::Min, 0), -1);
        assert_eq!(r.q_skip(Exposure::Min, 1), 0);
        assert_eq!(r.q_skip(Exposure::Max, 0), -1);
        assert_eq!(r.q_skip(Exposure::Max, 2), 0);

        let r73 = ExposureRules::new(7, 3);
        assert_eq!(r73.p_skip(Exposure::Min), 3);
        assert_eq!(r73.p_skip(Exposure::Max), 2);
        assert_eq!(r73.q_skip(Exposure::Min, 0), 0);
        assert_eq!(r73.q_skip(Exposure::Max, 0), 0);

        let r37 = ExposureRules::new(3, 7);
        assert_eq!(r37.p_skip(Exposure::Max), 1);
        assert_eq!(r37.q_skip(Exposure::Min, 1), -1);
    }

    #[test]
    fn branching_counts() {
        let r = ExposureRules::new(5, 4);
        assert_eq!(r.vertices_to_do(Exposure::Min), 2);
        assert_eq!(r.vertices_to_do(Exposure::Max), 3);
        assert_eq!(r.pgons_to_do(Exposure::Min, 0), 1);
        assert_eq!(r.pgons_to_do(Exposure::Min, 1), 2);

        let r73 = ExposureRules::new(7, 3);
        assert_eq!(r73.vertices_to_do(Exposure::Min), 2);
        assert_eq!(r73.vertices_to_do(Exposure::Max), 3);
        assert_eq!(r73.pgons_to_do(Exposure::Max, 1), 1);

        let r37 = ExposureRules::new(3, 7);
        assert_eq!(r37.vertices_to_do(Exposure::Max), 1);
        assert_eq!(r37.pgons_to_do(Exposure::Min, 1), 3);
        assert_eq!(r37.pgons_to_do(Exposure::Max, 1), 4);
        assert_eq!(r37.pgons_to_do(Exposure::Max, 0), 4);
    }

    #[test]
    fn triangle_fans_depend_on_exposure_at_the_first_vertex() {
        let r37 = ExposureRules::new(3, 7);
        assert_eq!(r37.vertices_to_do(Exposure::Min), 1);
        assert_eq!(r37.pgons_to_do(Exposure::Min, 0), 3);
        assert_eq!(r37.pgons_to_do(Exposure::Max, 0), 4);

        let r38 = ExposureRules::new(3, 8);
        assert_eq!(r38.pgons_to_do(Exposure::Min, 0), 4);
        assert_eq!(r38.pgons_to_do(Exposure::Max, 0), 5);
    }
}
