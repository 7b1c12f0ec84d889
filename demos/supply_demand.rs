//! Builds a supply/demand market figure and a cost-curve figure, then prints
//! the directive lists for both the blank and the solved versions.

use econsketch::{
    Axis, DropLine, FigureError, Line, Marker, MultiAxis, Point2, RationalCostCurve,
};

fn main() -> Result<(), FigureError> {
    let supply = Line::from_two_points(Point2::new(0.0, 2.0), Point2::new(8.0, 10.0))?
        .with_label("S");
    let demand = Line::new(10.0, -1.0).with_label("D");
    let equilibrium = supply.intersect(&demand)?;

    let mut market = Axis::new(11.0, 11.0).with_title("Market");
    market.add(supply);
    market.add(demand);
    market.add_solution_only(Marker::new(equilibrium).with_label("E"));
    market.add_solution_only(DropLine::to_x_axis(equilibrium, "Q*"));
    market.add_solution_only(DropLine::to_y_axis(equilibrium, "P*"));

    let marginal = Line::new(2.0, 0.25).with_label("MC");
    let atc = RationalCostCurve::from_marginal(&marginal, Point2::new(4.0, 10.0)).with_label("ATC");
    let q_min = atc.minimum()?;

    let mut firm = Axis::new(24.0, 12.0).with_title("Representative firm").with_skip(4);
    firm.add(marginal);
    firm.add(atc.clone());
    firm.add_solution_only(Marker::new(Point2::new(q_min, atc.eval(q_min))).with_label("min ATC"));

    let mut figure = MultiAxis::new();
    figure.push(market);
    figure.push(firm);

    println!("--- blank ---");
    for directive in figure.render(false) {
        println!("{directive:?}");
    }
    println!("--- solved ---");
    for directive in figure.render(true) {
        println!("{directive:?}");
    }
    Ok(())
}
