//! Normal-form game tables rendered as drawing directives.
//!
//! A game table is laid out in the same coordinate space as the other
//! figures: cells are `cell_w` by `cell_h`, the grid occupies the first
//! quadrant, and headers hang off the top and left edges. The row player's
//! payoff sits in the upper half of each cell, the column player's in the
//! lower half.

use num_traits::Float;

use crate::curves::Line;
use crate::format::{format_scaled, NumKind, ScaleSpec};
use crate::primitives::Point2;
use crate::render::DrawDirective;
use crate::style::Style;

/// A two-player normal-form game with pre-rendered payoff strings.
///
/// `payoffs[i][j]` holds the row player's and column player's payoff text for
/// row strategy `i` against column strategy `j`. `best_response[0][j]` is the
/// row player's best row against column `j`; `best_response[1][i]` is the
/// column player's best column against row `i`.
#[derive(Debug, Clone)]
pub struct NormalForm<F> {
    pub players: [String; 2],
    pub strategies: [Vec<String>; 2],
    pub payoffs: Vec<Vec<[String; 2]>>,
    pub best_response: [Vec<usize>; 2],
    pub cell_w: F,
    pub cell_h: F,
    /// Blank the payoff cells in the unsolved rendering; with the solution
    /// flag raised they reappear in solution red.
    pub hide_cells: bool,
    /// Ring the best-response payoffs in the solved rendering.
    pub circle_solutions: bool,
}

impl<F: Float> NormalForm<F> {
    /// Creates a table with the default cell geometry.
    pub fn new(
        players: [String; 2],
        strategies: [Vec<String>; 2],
        payoffs: Vec<Vec<[String; 2]>>,
        best_response: [Vec<usize>; 2],
    ) -> Self {
        Self {
            players,
            strategies,
            payoffs,
            best_response,
            cell_w: F::from(5.0).unwrap(),
            cell_h: F::from(3.0).unwrap(),
            hide_cells: false,
            circle_solutions: true,
        }
    }

    /// Returns this table with the given cell size.
    pub fn with_cell_size(self, cell_w: F, cell_h: F) -> Self {
        Self {
            cell_w,
            cell_h,
            ..self
        }
    }

    /// Returns this table with payoff cells blanked until solved.
    pub fn with_hidden_cells(self, hide_cells: bool) -> Self {
        Self { hide_cells, ..self }
    }

    /// Renders the table to directives.
    ///
    /// Emission order is headers, grid segments, payoff texts, then
    /// best-response rings when solving.
    pub fn render(&self, show_solution: bool) -> Vec<DrawDirective<F>> {
        let n = self.strategies[0].len();
        let k = self.strategies[1].len();
        let cw = self.cell_w;
        let ch = self.cell_h;
        let tabw = cw * F::from(k).unwrap();
        let tabh = ch * F::from(n).unwrap();
        let half = F::from(0.5).unwrap();
        let quarter = F::from(0.25).unwrap();

        let mut out = Vec::new();

        // Player names along the left edge and above the table.
        out.push(DrawDirective::Text {
            at: Point2::new(-F::one(), tabh * half),
            text: self.players[0].clone(),
            style: Style::default(),
        });
        out.push(DrawDirective::Text {
            at: Point2::new(tabw * half, tabh + F::one()),
            text: self.players[1].clone(),
            style: Style::default(),
        });

        // Strategy headers.
        for (i, name) in self.strategies[0].iter().enumerate() {
            let y = tabh - ch * F::from(i).unwrap() - ch * half;
            out.push(DrawDirective::Text {
                at: Point2::new(-F::from(0.2).unwrap(), y),
                text: name.clone(),
                style: Style::default(),
            });
        }
        for (j, name) in self.strategies[1].iter().enumerate() {
            let x = cw * F::from(j).unwrap() + cw * half;
            out.push(DrawDirective::Text {
                at: Point2::new(x, tabh + F::from(0.2).unwrap()),
                text: name.clone(),
                style: Style::default(),
            });
        }

        // Cell grid.
        for i in 0..=n {
            let y = ch * F::from(i).unwrap();
            out.push(DrawDirective::Segment {
                from: Point2::new(F::zero(), y),
                to: Point2::new(tabw, y),
                label: None,
                style: Style::default(),
            });
        }
        for j in 0..=k {
            let x = cw * F::from(j).unwrap();
            out.push(DrawDirective::Segment {
                from: Point2::new(x, F::zero()),
                to: Point2::new(x, tabh),
                label: None,
                style: Style::default(),
            });
        }

        // Payoff texts: upper half row player, lower half column player.
        let visible = !self.hide_cells || show_solution;
        if visible {
            let style = if self.hide_cells {
                Style::solution()
            } else {
                Style::default()
            };
            for (i, row) in self.payoffs.iter().enumerate() {
                let ytop = tabh - ch * F::from(i).unwrap();
                for (j, cell) in row.iter().enumerate() {
                    let xmid = cw * F::from(j).unwrap() + cw * half;
                    out.push(DrawDirective::Text {
                        at: Point2::new(xmid, ytop - ch * quarter),
                        text: cell[0].clone(),
                        style,
                    });
                    out.push(DrawDirective::Text {
                        at: Point2::new(xmid, ytop - ch * quarter * F::from(3.0).unwrap()),
                        text: cell[1].clone(),
                        style,
                    });
                }
            }
        }

        // Best-response rings.
        if show_solution && self.circle_solutions {
            let rx = cw * half - F::from(0.1).unwrap();
            let ry = ch * quarter - F::from(0.1).unwrap();
            for (j, &i) in self.best_response[0].iter().enumerate() {
                let x = cw * F::from(j).unwrap() + cw * half;
                let y = tabh - ch * F::from(i).unwrap() - ch * quarter;
                out.push(DrawDirective::Ellipse {
                    center: Point2::new(x, y),
                    rx,
                    ry,
                    style: Style::solution(),
                });
            }
            for (i, &j) in self.best_response[1].iter().enumerate() {
                let x = cw * F::from(j).unwrap() + cw * half;
                let y = tabh - ch * F::from(i).unwrap() - ch * quarter * F::from(3.0).unwrap();
                out.push(DrawDirective::Ellipse {
                    center: Point2::new(x, y),
                    rx,
                    ry,
                    style: Style::solution(),
                });
            }
        }

        out
    }
}

/// A Cournot-style quantity game built from a demand line and a flat average
/// cost.
///
/// Both firms pick a quantity from the same menu; price clears at
/// `demand.eval(q1 + q2)` and each firm earns `(price - atc) * q`. Payoffs
/// are formatted as price-times-quantity profits, best responses are the
/// strict argmax (earliest quantity wins ties), and a demand-schedule table
/// accompanies the game.
#[derive(Debug, Clone)]
pub struct QuantityGame<F> {
    pub form: NormalForm<F>,
    /// Two rows: prices and quantities demanded over `[2*qmin, 2*qmax]`.
    pub schedule: [Vec<String>; 2],
}

impl<F: Float> QuantityGame<F> {
    pub fn new(
        players: [String; 2],
        abbreviations: [String; 2],
        quantities: &[F],
        quantity_names: &[String],
        demand: &Line<F>,
        atc: F,
        scale: &ScaleSpec,
    ) -> Self {
        let strategies: Vec<String> = quantity_names
            .iter()
            .zip(quantities)
            .map(|(name, &q)| {
                format!(
                    "{name} ({})",
                    format_scaled(q.to_f64().unwrap_or(0.0), scale, NumKind::Quantity)
                )
            })
            .collect();

        let profit = |q_own: F, q_other: F| (demand.eval(q_own + q_other) - atc) * q_own;

        let payoffs: Vec<Vec<[String; 2]>> = quantities
            .iter()
            .map(|&q1| {
                quantities
                    .iter()
                    .map(|&q2| {
                        [
                            format!(
                                "{} profit {}",
                                abbreviations[0],
                                format_scaled(
                                    profit(q1, q2).to_f64().unwrap_or(0.0),
                                    scale,
                                    NumKind::PriceQuantity
                                )
                            ),
                            format!(
                                "{} profit {}",
                                abbreviations[1],
                                format_scaled(
                                    profit(q2, q1).to_f64().unwrap_or(0.0),
                                    scale,
                                    NumKind::PriceQuantity
                                )
                            ),
                        ]
                    })
                    .collect()
            })
            .collect();

        let argmax = |other: F| {
            let mut best = 0;
            let mut best_profit = F::neg_infinity();
            for (idx, &q) in quantities.iter().enumerate() {
                let p = profit(q, other);
                if p > best_profit {
                    best_profit = p;
                    best = idx;
                }
            }
            best
        };
        let row_best: Vec<usize> = quantities.iter().map(|&q2| argmax(q2)).collect();
        let col_best: Vec<usize> = quantities.iter().map(|&q1| argmax(q1)).collect();

        let form = NormalForm::new(
            players,
            [strategies.clone(), strategies],
            payoffs,
            [row_best, col_best],
        )
        .with_cell_size(F::from(3.5).unwrap(), F::from(2.5).unwrap())
        .with_hidden_cells(true);

        let schedule = Self::demand_schedule(quantities, demand, scale);

        Self { form, schedule }
    }

    fn demand_schedule(quantities: &[F], demand: &Line<F>, scale: &ScaleSpec) -> [Vec<String>; 2] {
        let two = F::one() + F::one();
        let qmin = quantities.iter().fold(F::infinity(), |m, &q| m.min(q)) * two;
        let qmax = quantities.iter().fold(F::neg_infinity(), |m, &q| m.max(q)) * two;

        let mut prices = vec!["Price".to_string()];
        let mut demanded = vec!["Q. demanded".to_string()];
        let mut q = qmin;
        while q <= qmax {
            prices.push(format_scaled(
                demand.eval(q).to_f64().unwrap_or(0.0),
                scale,
                NumKind::Price,
            ));
            demanded.push(format_scaled(
                q.to_f64().unwrap_or(0.0),
                scale,
                NumKind::Quantity,
            ));
            q = q + F::one();
        }
        [prices, demanded]
    }
}
