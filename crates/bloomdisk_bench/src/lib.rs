// Benchmarks live under benches/.
