pub mod voronoi;
