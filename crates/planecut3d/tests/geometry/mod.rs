mod cube_cross_section;
mod missing_bvh;
mod no_intersection;
mod order_independence;
mod point_welding;
mod tilted_cross_section;
