//! Walkthrough Demo - Breadcrumbs and Logical History
//!
//! Drives a `HistoryController` the way a router would and prints the trail
//! after every step. Run with `RUST_LOG=portal_breadcrumbs=debug` to see the
//! controller's log output.

use portal_breadcrumbs::*;

fn print_trail(step: &str, controller: &HistoryController<Vec<NavigationRequest>>) {
    let labels: Vec<&str> = controller
        .history()
        .iter()
        .map(|entry| entry.label.as_str())
        .collect();
    println!(
        "{:<28} {}   [back: {}, forward: {}]",
        step,
        labels.join(" > "),
        controller.can_go_back(),
        controller.can_go_forward()
    );
}

/// Hand queued requests back to the controller, as a router would.
fn settle(controller: &mut HistoryController<Vec<NavigationRequest>>) {
    let requests: Vec<NavigationRequest> = controller.sink_mut().drain(..).collect();
    for request in requests {
        controller.sync(request.to_location());
    }
}

fn main() {
    env_logger::init();

    let mut controller = match HistoryController::try_new(NavigationConfig::portal(), Vec::new()) {
        Ok(controller) => controller,
        Err(err) => {
            eprintln!("invalid navigation tables: {err}");
            return;
        }
    };

    controller.sync(Location::parse("/programs/master-degree/ai"));
    print_trail("open programme", &controller);

    let origin = OriginContext::from_program("/programs/master-degree/ai", "AI Masters");
    controller.sync(Location::parse("/schools/cs").with_origin(origin));
    print_trail("related school", &controller);

    controller.go_back();
    settle(&mut controller);
    print_trail("back", &controller);

    controller.go_forward();
    settle(&mut controller);
    print_trail("forward", &controller);

    controller.sync(Location::parse("/admissions#fees-scholarships"));
    print_trail("admissions anchor", &controller);

    while controller.go_back() {
        settle(&mut controller);
        print_trail("back", &controller);
    }

    controller.sync(Location::parse("/admin/view-student/42"));
    print_trail("admin student view", &controller);
}
